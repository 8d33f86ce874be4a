use std::collections::BTreeSet;
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;
use tint_events::{Property, Subscription};
use tint_resources::{LanguageIdentifier, ResolveError, ResourceResolver};

use super::{PROPERTY_CURRENT_THEME, ThemeListener, ThemeManager, ThemeVetoListener, suggest_theme};
use crate::error::ThemeError;

struct ThemeEntry {
	name: String,
	resolver: Arc<dyn ResourceResolver>,
}

/// Registered themes, immutable once built.
struct ThemeTable {
	entries: Vec<ThemeEntry>,
	/// Canonical names and aliases to entry index.
	by_key: HashMap<String, usize>,
}

impl ThemeTable {
	fn lookup(&self, key: &str) -> Option<&ThemeEntry> {
		self.by_key.get(key).map(|&idx| &self.entries[idx])
	}

	fn unknown(&self, name: &str) -> ThemeError {
		ThemeError::UnknownTheme {
			name: name.to_owned(),
			suggestion: suggest_theme(name, self.by_key.keys().map(String::as_str))
				.and_then(|key| self.lookup(key))
				.map(|entry| entry.name.clone()),
		}
	}
}

/// Builder for [`DefaultThemeManager`].
#[derive(Default)]
pub struct ThemeManagerBuilder {
	entries: Vec<(String, Vec<String>, Arc<dyn ResourceResolver>)>,
	initial: Option<String>,
}

impl ThemeManagerBuilder {
	/// Registers a theme backed by `resolver`.
	pub fn theme(self, name: impl Into<String>, resolver: impl ResourceResolver + 'static) -> Self {
		self.theme_with_aliases(name, std::iter::empty::<String>(), resolver)
	}

	/// Registers a theme reachable under additional alias names.
	pub fn theme_with_aliases<I, S>(
		mut self,
		name: impl Into<String>,
		aliases: I,
		resolver: impl ResourceResolver + 'static,
	) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.entries.push((
			name.into(),
			aliases.into_iter().map(Into::into).collect(),
			Arc::new(resolver),
		));
		self
	}

	/// Selects the theme active after construction. Defaults to the first
	/// registered theme.
	pub fn initial(mut self, name: impl Into<String>) -> Self {
		self.initial = Some(name.into());
		self
	}

	pub fn build(self) -> Result<DefaultThemeManager, ThemeError> {
		let mut table = ThemeTable {
			entries: Vec::with_capacity(self.entries.len()),
			by_key: HashMap::default(),
		};

		for (name, aliases, resolver) in self.entries {
			let idx = table.entries.len();
			for key in std::iter::once(&name).chain(&aliases) {
				if table.by_key.insert(key.clone(), idx).is_some() {
					return Err(ThemeError::Duplicate(key.clone()));
				}
			}
			table.entries.push(ThemeEntry { name, resolver });
		}

		let initial = match self.initial {
			Some(initial) => table
				.lookup(&initial)
				.map(|entry| entry.name.clone())
				.ok_or_else(|| table.unknown(&initial))?,
			None => table
				.entries
				.first()
				.map(|entry| entry.name.clone())
				.ok_or(ThemeError::NoThemes)?,
		};

		Ok(DefaultThemeManager {
			table: Arc::new(table),
			current: Arc::new(Property::new(PROPERTY_CURRENT_THEME, initial)),
		})
	}
}

/// In-memory [`ThemeManager`] with one resolver per theme.
pub struct DefaultThemeManager {
	table: Arc<ThemeTable>,
	current: Arc<Property<String>>,
}

impl DefaultThemeManager {
	pub fn builder() -> ThemeManagerBuilder {
		ThemeManagerBuilder::default()
	}

	/// The observable current-theme property.
	pub fn current_property(&self) -> &Property<String> {
		&self.current
	}
}

impl ThemeManager for DefaultThemeManager {
	fn themes(&self) -> BTreeSet<String> {
		self.table
			.entries
			.iter()
			.map(|entry| entry.name.clone())
			.collect()
	}

	fn current_theme(&self) -> String {
		(*self.current.get()).clone()
	}

	fn set_current_theme(&self, name: &str) -> Result<(), ThemeError> {
		let entry = self
			.table
			.lookup(name)
			.ok_or_else(|| self.table.unknown(name))?;
		if self.current.set(entry.name.clone())? {
			tracing::debug!(theme = %entry.name, "current theme set");
		}
		Ok(())
	}

	fn resource_resolver(&self) -> Arc<dyn ResourceResolver> {
		Arc::new(ThemeScopedResolver {
			table: self.table.clone(),
			current: self.current.clone(),
		})
	}

	fn subscribe(&self, listener: ThemeListener) -> Subscription {
		self.current.subscribe(listener)
	}

	fn subscribe_vetoable(&self, listener: ThemeVetoListener) -> Subscription {
		self.current.subscribe_vetoable(listener)
	}
}

impl std::fmt::Debug for DefaultThemeManager {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("DefaultThemeManager")
			.field("themes", &self.themes())
			.field("current", &self.current.get())
			.finish()
	}
}

/// Delegates to the resolver of the theme active at lookup time.
struct ThemeScopedResolver {
	table: Arc<ThemeTable>,
	current: Arc<Property<String>>,
}

impl ThemeScopedResolver {
	fn active(&self) -> Option<&ThemeEntry> {
		self.table.lookup(&self.current.get())
	}
}

impl ResourceResolver for ThemeScopedResolver {
	fn resolve(
		&self,
		key: &str,
		args: &[&str],
		locale: &LanguageIdentifier,
	) -> Result<String, ResolveError> {
		match self.active() {
			Some(entry) => entry.resolver.resolve(key, args, locale),
			None => Err(ResolveError::not_found(key, locale)),
		}
	}

	fn resolve_or(
		&self,
		key: &str,
		args: &[&str],
		locale: &LanguageIdentifier,
		default: &str,
	) -> Result<String, ResolveError> {
		match self.active() {
			Some(entry) => entry.resolver.resolve_or(key, args, locale, default),
			None => Ok(default.to_owned()),
		}
	}
}
