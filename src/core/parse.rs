use crate::domain::model::{Record, SkipReason};

/// Parse one line of simulator output into a record.
///
/// Tokens are comma separated and trimmed; empty tokens (from leading or
/// trailing commas) are dropped. Exactly three integers must remain, read
/// as `result, operand_a, operand_b`.
pub fn parse_line(line: &str) -> Result<Record, SkipReason> {
    let mut values = Vec::with_capacity(3);
    for token in line.trim().split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let value = token.parse::<i64>().map_err(|_| SkipReason::Malformed {
            token: token.to_string(),
        })?;
        values.push(value);
    }

    match values[..] {
        [result, operand_a, operand_b] => Ok(Record::new(result, operand_a, operand_b)),
        _ => Err(SkipReason::Arity {
            found: values.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_line("6,12,18"), Ok(Record::new(6, 12, 18)));
        assert_eq!(parse_line("6,12,18\n"), Ok(Record::new(6, 12, 18)));
        assert_eq!(parse_line("  6, 12 ,18  \r\n"), Ok(Record::new(6, 12, 18)));
        assert_eq!(parse_line("-3,+4,-5"), Ok(Record::new(-3, 4, -5)));
    }

    #[test]
    fn test_empty_tokens_dropped() {
        assert_eq!(parse_line("6,12,18,"), Ok(Record::new(6, 12, 18)));
        assert_eq!(parse_line(",6,,12,18,,"), Ok(Record::new(6, 12, 18)));
        assert_eq!(parse_line("6, ,12,18"), Ok(Record::new(6, 12, 18)));
    }

    #[test]
    fn test_wrong_arity() {
        assert_eq!(parse_line("6,12"), Err(SkipReason::Arity { found: 2 }));
        assert_eq!(parse_line("6,12,18,24"), Err(SkipReason::Arity { found: 4 }));
        assert_eq!(parse_line(""), Err(SkipReason::Arity { found: 0 }));
        assert_eq!(parse_line(",,,"), Err(SkipReason::Arity { found: 0 }));
    }

    #[test]
    fn test_malformed_token() {
        assert_eq!(
            parse_line("6,twelve,18"),
            Err(SkipReason::Malformed {
                token: "twelve".to_string()
            })
        );
        assert!(parse_line("6,1.5,18").is_err());
        assert!(parse_line("6,0x10,18").is_err());
        assert!(parse_line("6,99999999999999999999,18").is_err());
    }

    #[test]
    fn test_malformed_wins_over_arity() {
        assert!(matches!(parse_line("abc"), Err(SkipReason::Malformed { .. })));
    }
}
