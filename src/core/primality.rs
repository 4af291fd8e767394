/// Trial-division primality test with the 6k±1 optimization: after ruling
/// out multiples of 2 and 3, the only candidate divisors left are i and i+2
/// for i = 5, 11, 17, ... up to the square root of num.
pub fn is_prime(num: i64) -> bool {
    if num <= 1 {
        return false;
    }
    if num <= 3 {
        return true;
    }
    if num % 2 == 0 || num % 3 == 0 {
        return false;
    }
    let mut i: i64 = 5;
    // i <= num / i is i*i <= num without overflowing when num is near
    // i64::MAX (num >= 5 here, so the division is safe).
    while i <= num / i {
        if num % i == 0 || num % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
