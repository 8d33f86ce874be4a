//! In-memory resource bundles with locale fallback.

use rustc_hash::FxHashMap as HashMap;
use unic_langid::LanguageIdentifier;

use crate::error::ResolveError;
use crate::format::format_message;
use crate::resolver::ResourceResolver;


/// Returns the lookup order for `locale`, most specific first.
///
/// Variants are dropped first, then the region, then the script, and the root
/// locale (`und`) always comes last: `sr-Latn-RS-valencia` resolves through
/// `sr-Latn-RS`, `sr-Latn`, `sr` and finally the root bundle.
pub fn locale_chain(locale: &LanguageIdentifier) -> Vec<LanguageIdentifier> {
	let mut chain = vec![locale.clone()];
	let mut current = locale.clone();

	if current.variants().next().is_some() {
		current.clear_variants();
		chain.push(current.clone());
	}
	if current.region.take().is_some() {
		chain.push(current.clone());
	}
	if current.script.take().is_some() {
		chain.push(current.clone());
	}

	let root = LanguageIdentifier::default();
	if chain.last() != Some(&root) {
		chain.push(root);
	}
	chain
}

/// Resolver over per-locale key/template tables.
///
/// Lookups walk [`locale_chain`] until a table defines the key; the template is
/// then formatted with the positional arguments.
#[derive(Debug, Clone, Default)]
pub struct BundleResolver {
	name: Option<String>,
	bundles: HashMap<LanguageIdentifier, HashMap<Box<str>, Box<str>>>,
}

impl BundleResolver {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a resolver tagged with `name`, used in log output.
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::default()
		}
	}

	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Defines `key` for `locale`, replacing any previous template.
	pub fn insert(&mut self, locale: LanguageIdentifier, key: &str, template: &str) {
		self.bundles
			.entry(locale)
			.or_default()
			.insert(Box::from(key), Box::from(template));
	}

	/// Adds a single entry, builder style.
	pub fn with_entry(mut self, locale: LanguageIdentifier, key: &str, template: &str) -> Self {
		self.insert(locale, key, template);
		self
	}

	/// Adds several entries for one locale.
	pub fn with_entries<'a, I>(mut self, locale: LanguageIdentifier, entries: I) -> Self
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		let table = self.bundles.entry(locale).or_default();
		for (key, template) in entries {
			table.insert(Box::from(key), Box::from(template));
		}
		self
	}

	/// Adds entries to the root bundle consulted for every locale.
	pub fn with_root_entries<'a, I>(self, entries: I) -> Self
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		self.with_entries(LanguageIdentifier::default(), entries)
	}

	/// Returns the raw template for `key`, following the locale chain.
	pub fn template(&self, key: &str, locale: &LanguageIdentifier) -> Option<&str> {
		locale_chain(locale).iter().find_map(|candidate| {
			self.bundles
				.get(candidate)
				.and_then(|table| table.get(key))
				.map(|template| &**template)
		})
	}

	/// Number of keys defined across all locales.
	pub fn len(&self) -> usize {
		self.bundles.values().map(HashMap::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl ResourceResolver for BundleResolver {
	fn resolve(
		&self,
		key: &str,
		args: &[&str],
		locale: &LanguageIdentifier,
	) -> Result<String, ResolveError> {
		let Some(template) = self.template(key, locale) else {
			tracing::trace!(bundle = ?self.name, key, %locale, "resource not found");
			return Err(ResolveError::not_found(key, locale));
		};
		format_message(template, args).map_err(|source| ResolveError::Format {
			key: key.to_owned(),
			source,
		})
	}
}
