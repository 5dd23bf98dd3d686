/// Effects already bound to a canvas, keyed by element id.
///
/// A canvas is wired at most once: asking for an id that is already present
/// hands back the existing entry instead of building a second one.
pub struct Registry<T> {
    entries: Vec<(String, T)>,
}

impl<T: Clone> Registry<T> {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.entries
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, v)| v.clone())
    }

    /// Entry for `id`, calling `make` only when there is none yet. The flag is
    /// true when a new entry was built. A failed `make` leaves no entry.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        id: &str,
        make: impl FnOnce() -> Result<T, E>,
    ) -> Result<(T, bool), E> {
        if let Some(existing) = self.get(id) {
            return Ok((existing, false));
        }
        let value = make()?;
        self.entries.push((id.to_owned(), value.clone()));
        Ok((value, true))
    }
}
