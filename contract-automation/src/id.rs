//! Contract reference identifiers.

use chrono::Utc;
use rand::Rng;

const ID_PREFIX: &str = "CTR";
const RANDOM_DIGITS: u32 = 4;

/// Generate a contract reference id: the current timestamp in base-36 plus
/// a short random tail, upper-cased.
///
/// Best-effort uniqueness only. The id is advisory, for human display and
/// cross-referencing, never a primary key.
pub fn new_contract_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let tail: u64 = rand::thread_rng().gen_range(0..36u64.pow(RANDOM_DIGITS));
    format!(
        "{}-{}-{:0>width$}",
        ID_PREFIX,
        to_base36(millis),
        to_base36(tail),
        width = RANDOM_DIGITS as usize
    )
}

fn to_base36(mut value: u64) -> String {
    const DIGITS: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let mut out = Vec::new();
    loop {
        out.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
        if value == 0 {
            break;
        }
    }
    out.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base36_digits() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1295), "ZZ");
    }

    #[test]
    fn test_id_format() {
        let id = new_contract_id();
        assert!(id.starts_with("CTR-"));
        assert_eq!(id, id.to_uppercase());

        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].len(), 4);
        assert!(parts[1..]
            .iter()
            .all(|p| p.chars().all(|c| c.is_ascii_alphanumeric())));
    }

    #[test]
    fn test_successive_ids_differ() {
        let ids: std::collections::HashSet<String> =
            (0..50).map(|_| new_contract_id()).collect();
        assert!(ids.len() > 1);
    }
}
