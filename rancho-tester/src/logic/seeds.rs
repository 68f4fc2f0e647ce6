use thiserror::Error;

/// Upper bound on how many seeds one range token may expand to.
pub const MAX_RANGE_SEEDS: u64 = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeedError {
    #[error("seed {0:?} is neither an integer nor a start..end range")]
    Invalid(String),
    #[error("seed range {0:?} is empty")]
    EmptyRange(String),
    #[error("seed range {token:?} expands to more than {max} seeds")]
    RangeTooLarge { token: String, max: u64 },
}

fn parse_one(token: &str) -> Option<u64> {
    token
        .parse::<u64>()
        .ok()
        .or_else(|| token.parse::<i64>().ok().map(i64::unsigned_abs))
}

/// Resolve CLI seed tokens into concrete seeds.
///
/// Accepts integers (negative values use their magnitude) and inclusive
/// `start..end` ranges. Duplicates are dropped, first occurrence wins.
///
/// # Errors
///
/// Returns an error for malformed tokens, empty ranges or ranges larger
/// than [`MAX_RANGE_SEEDS`].
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<u64>, SeedError> {
    let mut seeds: Vec<u64> = Vec::new();
    let mut push = |seed: u64| {
        if !seeds.contains(&seed) {
            seeds.push(seed);
        }
    };

    for token in tokens.iter().map(|t| t.trim()).filter(|t| !t.is_empty()) {
        if let Some((start, end)) = token.split_once("..") {
            let (Some(start), Some(end)) = (parse_one(start.trim()), parse_one(end.trim())) else {
                return Err(SeedError::Invalid(token.to_string()));
            };
            if end < start {
                return Err(SeedError::EmptyRange(token.to_string()));
            }
            if end - start >= MAX_RANGE_SEEDS {
                return Err(SeedError::RangeTooLarge {
                    token: token.to_string(),
                    max: MAX_RANGE_SEEDS,
                });
            }
            (start..=end).for_each(&mut push);
        } else {
            let seed = parse_one(token).ok_or_else(|| SeedError::Invalid(token.to_string()))?;
            push(seed);
        }
    }

    Ok(seeds)
}
