/// Numbers that halt reduction.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Sum digits until the value is a single digit or a master number.
/// `reduce(0)` is 0.
pub fn reduce(mut n: u32) -> u32 {
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    n
}

/// Plain digital root, 1..=9, ignoring master numbers. `root(0)` is 0.
pub fn digital_root(n: u32) -> u32 {
    if n == 0 {
        0
    } else {
        1 + (n - 1) % 9
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_numbers_halt() {
        assert_eq!(reduce(11), 11);
        assert_eq!(reduce(22), 22);
        assert_eq!(reduce(33), 33);
        // 2 + 9 = 11, which is master
        assert_eq!(reduce(29), 11);
        // 3 + 8 = 11
        assert_eq!(reduce(38), 11);
        assert_eq!(reduce(1990), 1);
    }

    #[test]
    fn test_plain_reduction() {
        assert_eq!(reduce(0), 0);
        assert_eq!(reduce(7), 7);
        assert_eq!(reduce(10), 1);
        assert_eq!(reduce(99), 9);
        assert_eq!(reduce(44), 8);
    }

    #[test]
    fn test_digital_root_ignores_masters() {
        assert_eq!(digital_root(11), 2);
        assert_eq!(digital_root(22), 4);
        assert_eq!(digital_root(9), 9);
        assert_eq!(digital_root(18), 9);
        assert_eq!(digital_root(0), 0);
    }
}
