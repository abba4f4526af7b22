use super::error::{Error, Scope};
use super::feature::FeatureDescriptor;

/// Named atom and bond features for one molecule type.
///
/// Features are kept in registration order, which is also the order
/// [`features`](Self::features) lists them in. Once built, a registry is
/// only read, so a shared reference can be handed to any number of threads.
pub struct FeatureRegistry<M: ?Sized> {
    atom: Vec<FeatureDescriptor<M>>,
    bond: Vec<FeatureDescriptor<M>>,
}

impl<M: ?Sized> FeatureRegistry<M> {
    pub fn new() -> Self {
        Self {
            atom: Vec::new(),
            bond: Vec::new(),
        }
    }

    /// Adds a feature under `scope`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateFeature`] if the name is taken in that scope.
    pub fn register(&mut self, scope: Scope, feature: FeatureDescriptor<M>) -> Result<(), Error> {
        let slot = self.scope_mut(scope);
        if slot.iter().any(|f| f.name() == feature.name()) {
            return Err(Error::DuplicateFeature {
                scope,
                name: feature.name().to_string(),
            });
        }
        slot.push(feature);
        Ok(())
    }

    /// Looks up a feature by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFeature`] if nothing is registered under it.
    pub fn get(&self, scope: Scope, name: &str) -> Result<&FeatureDescriptor<M>, Error> {
        self.features(scope)
            .iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| Error::unknown_feature(scope, name))
    }

    /// Looks up several features, keeping the requested order.
    pub fn resolve<S: AsRef<str>>(
        &self,
        scope: Scope,
        names: &[S],
    ) -> Result<Vec<FeatureDescriptor<M>>, Error> {
        names
            .iter()
            .map(|name| self.get(scope, name.as_ref()).cloned())
            .collect()
    }

    pub fn features(&self, scope: Scope) -> &[FeatureDescriptor<M>] {
        match scope {
            Scope::Atom => &self.atom,
            Scope::Bond => &self.bond,
        }
    }

    pub fn names(&self, scope: Scope) -> impl Iterator<Item = &str> {
        self.features(scope).iter().map(|f| f.name())
    }

    fn scope_mut(&mut self, scope: Scope) -> &mut Vec<FeatureDescriptor<M>> {
        match scope {
            Scope::Atom => &mut self.atom,
            Scope::Bond => &mut self.bond,
        }
    }
}

impl<M: ?Sized> Default for FeatureRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}
