//! Name inflection helpers
//!
//! Case conversion and heuristic English singularization used when deriving
//! target entity names and default foreign keys from relation names. The
//! singularization rules cover regular plurals plus a small irregular table;
//! irregular plurals outside that table are not guaranteed correct. That is a
//! documented limitation of name derivation, and the target-override table
//! exists for exactly those cases.

use convert_case::{Case, Casing};

/// Irregular plural/singular pairs the suffix rules below would mangle.
const IRREGULAR: &[(&str, &str)] = &[
	("children", "child"),
	("feet", "foot"),
	("geese", "goose"),
	("men", "man"),
	("mice", "mouse"),
	("movies", "movie"),
	("people", "person"),
	("statuses", "status"),
	("teeth", "tooth"),
	("women", "woman"),
];

/// Words with no distinct singular form.
const UNCOUNTABLE: &[&str] = &["fish", "news", "series", "sheep", "species"];

/// Convert a relation name to its PascalCase model-name segment.
pub fn pascal_case(name: &str) -> String {
	name.to_case(Case::Pascal)
}

/// Convert a model type name to snake_case.
pub fn snake_case(name: &str) -> String {
	name.to_case(Case::Snake)
}

/// Singularize an English plural.
///
/// Operates on the final word only as far as suffixes are concerned, so
/// PascalCase compounds keep their prefix: `UserLanguages` becomes
/// `UserLanguage`.
///
/// # Examples
///
/// ```
/// use dynamic_relations::inflection::singularize;
///
/// assert_eq!(singularize("Comments"), "Comment");
/// assert_eq!(singularize("Categories"), "Category");
/// assert_eq!(singularize("Addresses"), "Address");
/// assert_eq!(singularize("People"), "Person");
/// ```
pub fn singularize(word: &str) -> String {
	let lower = word.to_lowercase();

	if UNCOUNTABLE.contains(&lower.as_str()) {
		return word.to_string();
	}
	for (plural, singular) in IRREGULAR {
		if lower == *plural {
			return match_leading_case(word, singular);
		}
	}

	if let Some(stem) = word.strip_suffix("ies") {
		if word.len() > 4 {
			return format!("{stem}y");
		}
	}
	for suffix in ["sses", "xes", "zes", "ches", "shes"] {
		if word.ends_with(suffix) {
			return word[..word.len() - 2].to_string();
		}
	}
	if word.ends_with("ss") {
		return word.to_string();
	}
	if let Some(stem) = word.strip_suffix('s') {
		return stem.to_string();
	}

	word.to_string()
}

/// Copy the leading-capital shape of `source` onto `replacement`.
fn match_leading_case(source: &str, replacement: &str) -> String {
	if source.chars().next().is_some_and(char::is_uppercase) {
		let mut chars = replacement.chars();
		match chars.next() {
			Some(first) => first.to_uppercase().chain(chars).collect(),
			None => String::new(),
		}
	} else {
		replacement.to_string()
	}
}
