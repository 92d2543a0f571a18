use crate::generator::GenerationError;
use crate::generator::ProviderMap;
use crate::schema::OperationKind;
use crate::types::Parameter;

/// Tunables for a single call to
/// [`generate_random_query`](crate::generator::generate_random_query).
///
/// Everything except the [`ProviderMap`] can be loaded from JSON (camelCase
/// keys, every key optional):
///
/// ```
/// # use libgraphql_query_gen::generator::Configuration;
/// let config: Configuration = serde_json::from_str(r#"{
///     "breadthProbability": 0.25,
///     "maxDepth": 3
/// }"#).unwrap();
/// assert_eq!(config.max_depth, 3);
/// assert!(config.ignore_optional_arguments);
/// ```
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    /// When present, optional arguments are passed if (and only if) their
    /// name appears in this list. Required arguments are always passed.
    pub arguments_to_consider: Option<Vec<String>>,

    /// Probability that any one candidate field (or union member) is
    /// selected.
    pub breadth_probability: f64,

    /// Probability that a composite field which passed the breadth draw is
    /// descended into.
    pub depth_probability: f64,

    /// Skip optional arguments. Only consulted when `arguments_to_consider`
    /// is `None`: once that list is set it alone decides which optional
    /// arguments are passed, so setting this to `false` does not add the
    /// optional arguments it leaves out.
    pub ignore_optional_arguments: bool,

    /// Maximum nesting of selection sets below the root selection set.
    pub max_depth: usize,

    pub operation_kind: OperationKind,

    #[serde(skip)]
    pub provider_map: Option<ProviderMap>,

    /// Fail with [`GenerationError::NoProviderFound`] instead of falling back
    /// to built-in values when no provider matches a variable.
    pub require_provider_match: bool,
}
impl Configuration {
    /// Indicates if a variable should be generated for `param`.
    pub fn considers_argument(&self, param: &Parameter) -> bool {
        if param.is_required() {
            return true;
        }
        match &self.arguments_to_consider {
            Some(arg_names) => arg_names.iter().any(|name| name == param.name()),
            None => !self.ignore_optional_arguments,
        }
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        for (setting, value) in [
            ("breadth_probability", self.breadth_probability),
            ("depth_probability", self.depth_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GenerationError::InvalidProbability { setting, value });
            }
        }
        Ok(())
    }

    pub fn with_provider_map(mut self, provider_map: ProviderMap) -> Self {
        self.provider_map = Some(provider_map);
        self
    }
}
impl Default for Configuration {
    fn default() -> Self {
        Self {
            arguments_to_consider: None,
            breadth_probability: 0.5,
            depth_probability: 0.5,
            ignore_optional_arguments: true,
            max_depth: 5,
            operation_kind: OperationKind::Query,
            provider_map: None,
            require_provider_match: false,
        }
    }
}
