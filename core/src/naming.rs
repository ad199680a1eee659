//! Name-case conversion shared by types, creators and the derive macro.
//!
//! A type tag is derived from an identifier by putting an underscore in front
//! of every upper-case letter except the first character, then upper-casing
//! the whole thing:
//!
//! ```
//! use reducer_sauce_core::naming::to_tag;
//!
//! assert_eq!(to_tag("addTodo"), "ADD_TODO");
//! assert_eq!(to_tag("AddTodo"), "ADD_TODO");
//! assert_eq!(to_tag("fetchUserByIdFast"), "FETCH_USER_BY_ID_FAST");
//! ```
//!
//! Runs of capitals are not treated as one word. `parseXMLNow` becomes
//! `PARSE_X_M_L_NOW`; existing tags depend on this, so it stays.

/// Convert a camelCase (or PascalCase) identifier into a SCREAMING_SNAKE tag.
#[must_use]
pub fn to_tag(name: &str) -> String {
    let mut tag = String::with_capacity(name.len() + name.len() / 2);

    for (index, ch) in name.chars().enumerate() {
        if index > 0 && ch.is_ascii_uppercase() {
            tag.push('_');
        }
        tag.push(ch);
    }

    tag.to_uppercase()
}
