//! Name normalization and nickname expansion.
//!
//! - [`normalize`](normalize::normalize): Fold case and diacritics, tokenize, and designate
//!   the surname (last token) and given names (preceding tokens)
//! - [`NicknameTable`](nicknames::NicknameTable): Static, bidirectional table of
//!   interchangeable given names (`bill` ↔ `william`)
//!
//! ## Folding
//!
//! | Input              | Tokens                  |
//! |--------------------|-------------------------|
//! | `José Díaz`        | `jose diaz`             |
//! | `O'Brien`          | `obrien`                |
//! | `Smith-Jones`      | `smith jones`           |
//! | `John Smith Jr.`   | `john smith`            |
//!
//! Normalization is deterministic and never fails; input with no usable token
//! yields an empty [`NormalizedName`](normalize::NormalizedName).

pub mod nicknames;
pub mod normalize;
