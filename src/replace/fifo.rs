use crate::cache::{Addr, Cache};

use super::{AccessResult, Replace};

/// FIFO eviction for a fully-associative unit: fill invalid lines first, then
/// evict the line with the oldest insertion stamp. Hits leave the stamp
/// untouched, so residency time alone decides the victim.
pub struct Fifo;

impl Replace<u64> for Fifo {
    fn access(cache: &mut Cache<u64, Self>, addr: Addr, seq: u64) -> AccessResult {
        let range = cache.set_range(addr.set);
        let set = &mut cache.lines[range];

        // tags are unique within the set, so at most one line can match
        if set.iter().any(|line| line.valid && line.tag == addr.tag) {
            return AccessResult::Hit;
        }

        let mut victim = 0;
        for (way, line) in set.iter().enumerate() {
            if !line.valid {
                victim = way;
                break;
            }
            if line.repl < set[victim].repl {
                victim = way;
            }
        }

        set[victim].fill(addr.tag, seq);
        AccessResult::Miss
    }
}

#[cfg(test)]
mod tests {
    use crate::cache::IsCache;

    use super::*;

    fn cache(size: u32) -> Cache<u64, Fifo> {
        // 64-byte blocks, a single set spanning every way
        Cache::new("test", 64, 1, (size / 64) as usize).unwrap()
    }

    #[test]
    fn fills_invalid_lines_before_evicting() {
        let mut fa = cache(256);
        for addr in [0x0, 0x40, 0x80, 0xC0] {
            assert_eq!(fa.access(addr).unwrap(), AccessResult::Miss);
        }
        // all four are resident
        for addr in [0x0, 0x40, 0x80, 0xC0] {
            assert_eq!(fa.access(addr).unwrap(), AccessResult::Hit);
        }
    }

    #[test]
    fn capacity_plus_one_evicts_the_first_inserted() {
        let mut fa = cache(256);
        for addr in [0x0, 0x40, 0x80, 0xC0] {
            assert_eq!(fa.access(addr).unwrap(), AccessResult::Miss);
        }
        // fifth distinct tag pushes out the first-inserted line only
        assert_eq!(fa.access(0x100).unwrap(), AccessResult::Miss);
        for addr in [0x40, 0x80, 0xC0, 0x100] {
            assert_eq!(fa.access(addr).unwrap(), AccessResult::Hit);
        }
        assert_eq!(fa.access(0x0).unwrap(), AccessResult::Miss);
    }

    #[test]
    fn hits_do_not_refresh_insertion_order() {
        let mut fa = cache(128);
        assert_eq!(fa.access(0x0).unwrap(), AccessResult::Miss);
        assert_eq!(fa.access(0x40).unwrap(), AccessResult::Miss);
        // a hit on the oldest line does not save it from FIFO eviction:
        // 0x80 still pushes out 0x0, not the less recently used 0x40
        assert_eq!(fa.access(0x0).unwrap(), AccessResult::Hit);
        assert_eq!(fa.access(0x80).unwrap(), AccessResult::Miss);
        assert_eq!(fa.access(0x40).unwrap(), AccessResult::Hit);
        assert_eq!(fa.access(0x0).unwrap(), AccessResult::Miss);
    }

    #[test]
    fn zero_address_is_an_ordinary_access() {
        let mut fa = cache(128);
        assert_eq!(fa.access(0x0).unwrap(), AccessResult::Miss);
        assert_eq!(fa.access(0x0).unwrap(), AccessResult::Hit);
    }
}
