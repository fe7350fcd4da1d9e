use crate::rules::Rules;

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, walking
/// the tree through [`Rules::play`] so every applied move is undone.
pub fn perft<R: Rules>(pos: &mut R, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner<R: Rules>(pos: &mut R, depth: u8, layers: &mut [Vec<R::Move>]) -> u64 {
        if depth == 0 {
            return 1;
        }

        let Some((buf, rest)) = layers.split_first_mut() else {
            return 0;
        };

        buf.clear();
        pos.legal_moves_into(buf);

        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            let mut child = pos.play(mv);
            nodes += inner(&mut *child, depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(pos, depth, &mut layers[..])
}
