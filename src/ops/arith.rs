/// Add two 32-bit integers, wrapping on overflow.
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}
