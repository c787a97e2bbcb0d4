//! JSON document of image records

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{IMAGE_URL_FIELD, TITLE_FIELD};

/// Ordered list of records as loaded from the JSON file.
///
/// Records are kept as raw JSON values so every field, and the key order
/// inside each object, survives a save untouched. Only `image_url` is ever
/// mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
	records: Vec<Value>,
}

impl Document {
	pub fn new(records: Vec<Value>) -> Self {
		Self { records }
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn records(&self) -> &[Value] {
		&self.records
	}

	/// Non-empty `image_url` string of a record, if it has one
	pub fn image_url(&self, index: usize) -> Option<&str> {
		self.string_field(index, IMAGE_URL_FIELD)
			.filter(|url| !url.is_empty())
	}

	pub fn title(&self, index: usize) -> Option<&str> {
		self.string_field(index, TITLE_FIELD)
	}

	/// Iterates `(record index, image_url)` over records that reference an image
	pub fn image_urls(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
		(0..self.records.len()).filter_map(|idx| self.image_url(idx).map(|url| (idx, url)))
	}

	/// Replaces the `image_url` of an object record. Returns false when the
	/// record does not exist or is not an object.
	pub fn set_image_url(&mut self, index: usize, url: String) -> bool {
		match self.records.get_mut(index).and_then(Value::as_object_mut) {
			Some(object) => {
				object.insert(IMAGE_URL_FIELD.to_string(), Value::String(url));
				true
			}
			None => false,
		}
	}

	fn string_field(&self, index: usize, field: &str) -> Option<&str> {
		self.records.get(index)?.get(field)?.as_str()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn sample() -> Document {
		serde_json::from_value(json!([
			{"title": "First", "image_url": "imgs/a_1.png"},
			{"title": "No image"},
			{"image_url": ""},
			{"image_url": 42},
			"not an object",
			{"image_url": r"imgs\b_2.jpg", "extra": [1, 2]}
		]))
		.unwrap()
	}

	#[test]
	fn only_non_empty_strings_are_image_urls() {
		let doc = sample();
		let urls: Vec<_> = doc.image_urls().collect();
		assert_eq!(urls, vec![(0, "imgs/a_1.png"), (5, r"imgs\b_2.jpg")]);
	}

	#[test]
	fn set_image_url_keeps_other_fields_and_order() {
		let mut doc = sample();
		assert!(doc.set_image_url(0, "imgs/a.png".to_string()));
		assert!(!doc.set_image_url(4, "x.png".to_string()));
		assert!(!doc.set_image_url(99, "x.png".to_string()));

		let out = serde_json::to_string(&doc.records()[0]).unwrap();
		assert_eq!(out, r#"{"title":"First","image_url":"imgs/a.png"}"#);
	}

	#[test]
	fn title_lookup() {
		let doc = sample();
		assert_eq!(doc.title(0), Some("First"));
		assert_eq!(doc.title(2), None);
		assert_eq!(doc.title(4), None);
	}

	#[test]
	fn rejects_non_array_documents() {
		assert!(serde_json::from_str::<Document>(r#"{"image_url": "a.png"}"#).is_err());
		assert!(serde_json::from_str::<Document>("[]").unwrap().is_empty());
	}
}
