/// The five top-level subcommands `zigma` understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encode,
    Decode,
    Check,
    Help,
    Version,
}

const COMMANDS: &[(&str, Operation)] = &[
    ("encode", Operation::Encode),
    ("decode", Operation::Decode),
    ("check", Operation::Check),
    ("help", Operation::Help),
    ("version", Operation::Version),
];

/// Resolve the user's first argument to an [`Operation`], the same way the
/// original command-line front end did: an exact match wins immediately; a
/// command name that merely *starts with* the input also wins immediately
/// (so `zigma enc` reaches [`Operation::Encode`]); otherwise the closest
/// match by Levenshtein distance is returned, to tolerate typos.
///
/// Every string (including the empty one) is a prefix of itself and of
/// longer strings, so an empty `input` matches the first registered command
/// ([`Operation::Encode`]) vacuously, just as the original's
/// `strncmp(name, input, strlen(input))` does with `strlen(input) == 0`.
/// `None` is unreachable since [`COMMANDS`] is non-empty, but the signature
/// stays an `Option` to mirror the original's nullable `OperationFunction`.
pub fn determine_operation(input: &str) -> Option<Operation> {
    let mut closest: Option<(u32, Operation)> = None;

    for &(name, op) in COMMANDS {
        let distance = levenshtein_distance(name, input);
        if distance == 0 {
            return Some(op);
        }
        if name.starts_with(input) {
            return Some(op);
        }
        if closest.map_or(true, |(best, _)| distance < best) {
            closest = Some((distance, op));
        }
    }

    closest.map(|(_, op)| op)
}

/// Classic edit-distance dynamic program, operating on bytes (subcommand
/// names are ASCII).
fn levenshtein_distance(s: &str, t: &str) -> u32 {
    let s = s.as_bytes();
    let t = t.as_bytes();

    let mut prev: Vec<u32> = (0..=t.len() as u32).collect();
    let mut curr = vec![0u32; t.len() + 1];

    for (i, &sc) in s.iter().enumerate() {
        curr[0] = i as u32 + 1;
        for (j, &tc) in t.iter().enumerate() {
            let cost = if sc == tc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[t.len()]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_match() {
        assert_eq!(determine_operation("encode"), Some(Operation::Encode));
        assert_eq!(determine_operation("version"), Some(Operation::Version));
    }

    #[test]
    fn prefix_match() {
        assert_eq!(determine_operation("enc"), Some(Operation::Encode));
        assert_eq!(determine_operation("dec"), Some(Operation::Decode));
    }

    #[test]
    fn typo_falls_back_to_closest() {
        assert_eq!(determine_operation("checc"), Some(Operation::Check));
    }

    #[test]
    fn empty_input_matches_first_command_vacuously() {
        assert_eq!(determine_operation(""), Some(Operation::Encode));
    }
}
