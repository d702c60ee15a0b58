/// Count label for `n` visible products: `"1 Product"`, otherwise `"<n> Products"`.
pub fn count_label(n: usize) -> String {
    if n == 1 {
        format!("{n} Product")
    } else {
        format!("{n} Products")
    }
}
