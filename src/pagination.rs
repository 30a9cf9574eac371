//! Cursor-aware collection wrapper returned by list operations.
//!
//! The service paginates collections through `Link` response headers
//! (`<https://org.example.com/api/v1/apps?after=...&limit=...>; rel="next"`). List
//! operations parse that header once and hand back a [`PagedList`] so callers can feed the
//! `after` cursor into the next call without touching response headers themselves.

// std
use std::{ops::Deref, slice::Iter, vec::IntoIter};
// self
use crate::{_prelude::*, transport::TransportResponse};

/// One page of results plus the cursor to the next page, when the service supplied one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PagedList<T> {
	items: Vec<T>,
	next: Option<Url>,
}
impl<T> PagedList<T> {
	pub(crate) fn new(items: Vec<T>, next: Option<Url>) -> Self {
		Self { items, next }
	}

	/// Items of this page.
	pub fn items(&self) -> &[T] {
		&self.items
	}

	/// Consumes the page and returns its items.
	pub fn into_items(self) -> Vec<T> {
		self.items
	}

	/// Full URL of the next page, as advertised by the service.
	pub fn next_page(&self) -> Option<&Url> {
		self.next.as_ref()
	}

	/// The `after` cursor of the next page, ready to pass into the next list call.
	pub fn after(&self) -> Option<String> {
		self.next
			.as_ref()?
			.query_pairs()
			.find(|(name, _)| name == "after")
			.map(|(_, value)| value.into_owned())
	}
}
impl<T> Deref for PagedList<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		&self.items
	}
}
impl<T> IntoIterator for PagedList<T> {
	type IntoIter = IntoIter<T>;
	type Item = T;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}
impl<'a, T> IntoIterator for &'a PagedList<T> {
	type IntoIter = Iter<'a, T>;
	type Item = &'a T;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

/// Extracts the `rel="next"` target from a response's `Link` headers.
///
/// Handles both repeated `Link` headers and comma-joined lists within one header value.
pub(crate) fn next_link(response: &TransportResponse) -> Option<Url> {
	response
		.headers
		.iter()
		.filter(|(name, _)| name.eq_ignore_ascii_case("link"))
		.find_map(|(_, value)| parse_link_header(value))
}

fn parse_link_header(value: &str) -> Option<Url> {
	value.split(',').find_map(|entry| {
		let mut sections = entry.split(';');
		let target = sections.next()?.trim().trim_start_matches('<').trim_end_matches('>');
		let is_next = sections.any(|section| section.trim() == "rel=\"next\"");

		if is_next { Url::parse(target).ok() } else { None }
	})
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn response_with_links(links: &[&str]) -> TransportResponse {
		TransportResponse {
			status: 200,
			headers: links.iter().map(|value| ("link".to_owned(), (*value).to_owned())).collect(),
			body: Vec::new(),
		}
	}

	#[test]
	fn next_link_skips_self_and_finds_next() {
		let response = response_with_links(&[
			"<https://org.example.com/api/v1/apps?limit=20>; rel=\"self\"",
			"<https://org.example.com/api/v1/apps?after=16uekb9y&limit=20>; rel=\"next\"",
		]);
		let next = next_link(&response).expect("The rel=\"next\" link should be parsed.");

		assert_eq!(next.as_str(), "https://org.example.com/api/v1/apps?after=16uekb9y&limit=20");
	}

	#[test]
	fn next_link_handles_comma_joined_headers() {
		let response = response_with_links(&[concat!(
			"<https://org.example.com/api/v1/groups?limit=5>; rel=\"self\", ",
			"<https://org.example.com/api/v1/groups?after=00gabc&limit=5>; rel=\"next\"",
		)]);
		let list = PagedList::new(vec![1, 2, 3], next_link(&response));

		assert_eq!(list.after().as_deref(), Some("00gabc"));
		assert_eq!(list.len(), 3);
	}

	#[test]
	fn absent_next_link_yields_no_cursor() {
		let response = response_with_links(&["<https://org.example.com/api/v1/apps>; rel=\"self\""]);
		let list: PagedList<u8> = PagedList::new(Vec::new(), next_link(&response));

		assert_eq!(list.next_page(), None);
		assert_eq!(list.after(), None);
		assert!(list.is_empty());
	}
}
