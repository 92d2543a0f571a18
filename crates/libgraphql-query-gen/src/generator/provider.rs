use crate::generator::Configuration;
use crate::generator::GenerationError;
use crate::generator::VariableValues;
use crate::generator::variable_name;
use crate::types::GraphQLType;
use indexmap::IndexMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, GenerationError>;

/// The wildcard segment of a provider pattern. Matches any segment.
pub const WILDCARD_SEGMENT: &str = "*";

/// Signature of a [`Provider::Resolver`] function.
///
/// Receives the variable values resolved so far for the current document (in
/// resolution order) and the named type of the argument being resolved.
pub type ProviderFn = dyn Fn(&VariableValues, Option<&GraphQLType>) -> serde_json::Value
    + Send
    + Sync;

/// A source for the value of one or more generated variables.
#[derive(Clone)]
pub enum Provider {
    Literal(serde_json::Value),
    Resolver(Arc<ProviderFn>),
}
impl Provider {
    pub fn literal(value: impl Into<serde_json::Value>) -> Self {
        Self::Literal(value.into())
    }

    pub fn resolver<F>(resolver_fn: F) -> Self
    where
        F: Fn(&VariableValues, Option<&GraphQLType>) -> serde_json::Value
            + Send
            + Sync
            + 'static,
    {
        Self::Resolver(Arc::new(resolver_fn))
    }

    /// Produce this provider's value. [`Provider::Literal`] values are
    /// returned unchanged.
    pub fn value(
        &self,
        resolved_so_far: &VariableValues,
        argument_type: Option<&GraphQLType>,
    ) -> serde_json::Value {
        match self {
            Self::Literal(value) => value.clone(),
            Self::Resolver(resolver_fn) => resolver_fn(resolved_so_far, argument_type),
        }
    }
}
impl std::fmt::Debug for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

/// Ordered mapping from variable-name patterns to [`Provider`]s.
///
/// A pattern has the same shape as a variable name (2 or 3 segments joined by
/// `__`) but any segment may be the wildcard `*`. When several patterns match
/// one variable name, the one inserted first wins.
#[derive(Clone, Debug, Default)]
pub struct ProviderMap(IndexMap<String, Provider>);
impl ProviderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pattern: &str) -> Option<&Provider> {
        self.0.get(pattern)
    }

    /// Add a provider for `pattern`. Re-inserting an existing pattern replaces
    /// its provider but keeps its original position.
    pub fn insert(
        &mut self,
        pattern: impl Into<String>,
        provider: Provider,
    ) -> Option<Provider> {
        self.0.insert(pattern.into(), provider)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Provider)> {
        self.0.iter().map(|(pattern, provider)| (pattern.as_str(), provider))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// All patterns in this map, in insertion order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|pattern| pattern.as_str())
    }

    /// Add a provider for `pattern`, returning `self` for chaining.
    pub fn with(mut self, pattern: impl Into<String>, provider: Provider) -> Self {
        self.insert(pattern, provider);
        self
    }
}
impl<S: Into<String>> FromIterator<(S, Provider)> for ProviderMap {
    fn from_iter<I: IntoIterator<Item = (S, Provider)>>(iter: I) -> Self {
        Self(iter.into_iter()
            .map(|(pattern, provider)| (pattern.into(), provider))
            .collect())
    }
}

/// Find the pattern among `candidates` that matches `var_name`.
///
/// An exact string match wins outright. Otherwise the first candidate (in
/// iteration order) with the same number of segments as `var_name`, whose
/// every segment is equal to the corresponding segment of `var_name` or is a
/// wildcard on either side, is returned. Candidates after the first match are
/// never inspected.
pub fn match_var_name<'c>(
    var_name: &str,
    candidates: impl IntoIterator<Item = &'c str>,
) -> Result<Option<&'c str>> {
    let candidates = candidates.into_iter().collect::<Vec<_>>();
    if let Some(exact) = candidates.iter().find(|candidate| **candidate == var_name) {
        return Ok(Some(*exact));
    }

    let var_segments = variable_name::split_segments(var_name)?;
    match_var_segments(&var_segments, candidates)
}

/// Same as [`match_var_name`] past the exact-match check, for a variable
/// whose segments are already known.
fn match_var_segments<'c, S: AsRef<str>>(
    var_segments: &[S],
    candidates: impl IntoIterator<Item = &'c str>,
) -> Result<Option<&'c str>> {
    for candidate in candidates {
        let candidate_segments = variable_name::split_segments(candidate)?;
        if candidate_segments.len() != var_segments.len() {
            continue;
        }

        let is_match = var_segments.iter()
            .zip(candidate_segments.iter())
            .all(|(var_segment, candidate_segment)| {
                let var_segment = var_segment.as_ref();
                var_segment == *candidate_segment
                    || var_segment == WILDCARD_SEGMENT
                    || *candidate_segment == WILDCARD_SEGMENT
            });
        if is_match {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

/// Look up the [`Provider`] whose pattern matches `var_name`.
pub fn get_provider<'m>(
    var_name: &str,
    provider_map: &'m ProviderMap,
) -> Result<&'m Provider> {
    find_provider(var_name, provider_map)?
        .ok_or_else(|| no_provider_found(var_name, Some(provider_map)))
}

/// Resolve the value of `var_name` using the provider map of `config`.
pub fn get_provider_value(
    var_name: &str,
    config: &Configuration,
    resolved_so_far: &VariableValues,
    argument_type: Option<&GraphQLType>,
) -> Result<serde_json::Value> {
    let Some(provider_map) = config.provider_map.as_ref() else {
        return Err(no_provider_found(var_name, None));
    };
    Ok(get_provider(var_name, provider_map)?.value(resolved_so_far, argument_type))
}

pub(crate) fn find_provider<'m>(
    var_name: &str,
    provider_map: &'m ProviderMap,
) -> Result<Option<&'m Provider>> {
    Ok(match_var_name(var_name, provider_map.patterns())?
        .and_then(|pattern| provider_map.get(pattern)))
}

/// Look up the provider for a generated variable whose name was joined from
/// `var_segments`. The segments are matched as given rather than re-split
/// from `var_name`.
pub(crate) fn find_provider_for_segments<'m, S: AsRef<str>>(
    var_name: &str,
    var_segments: &[S],
    provider_map: &'m ProviderMap,
) -> Result<Option<&'m Provider>> {
    if let Some(provider) = provider_map.get(var_name) {
        return Ok(Some(provider));
    }
    Ok(match_var_segments(var_segments, provider_map.patterns())?
        .and_then(|pattern| provider_map.get(pattern)))
}

pub(crate) fn no_provider_found(
    var_name: &str,
    provider_map: Option<&ProviderMap>,
) -> GenerationError {
    GenerationError::NoProviderFound {
        available_patterns: provider_map
            .map(|map| map.patterns().map(str::to_string).collect())
            .unwrap_or_default(),
        variable_name: var_name.to_string(),
    }
}
