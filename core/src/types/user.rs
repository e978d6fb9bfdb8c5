use nutype::nutype;
use std::borrow::Borrow;

/// Identifier of the account a record was posted by.
///
/// Compared byte-for-byte: no trimming or case folding, so `"tom"` and
/// `"Tom"` are distinct users.
#[nutype(
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct User(String);

// Lets per-user maps be probed with a plain `&str`.
impl Borrow<str> for User {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}
