use crate::generator::GenerationError;
use std::collections::HashMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, GenerationError>;

pub const SEGMENT_SEPARATOR: &str = "__";

/// A structured variable name of the form `Type__field` or
/// `Type__field__argument`.
///
/// When the same base name is derived more than once within a single
/// document, every occurrence after the first carries a positional suffix on
/// its last segment (`Query__user__id_2`, `Query__user__id_3`, ...).
///
/// The segments a name was derived from are kept alongside the joined name.
/// Schema names may themselves contain underscore runs (`_id`, `user_`,
/// `a__b`) that would not split back into the original segments.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct VariableName {
    base_name: String,
    base_segments: Vec<String>,
    name: String,
    segments: Vec<String>,
}
impl VariableName {
    pub fn as_str(&self) -> &str {
        self.name.as_str()
    }

    /// The name without any positional suffix.
    pub fn base_name(&self) -> &str {
        self.base_name.as_str()
    }

    /// The segments of [`VariableName::base_name`].
    pub fn base_segments(&self) -> &[String] {
        &self.base_segments
    }

    /// Indicates if this name carries a positional suffix (i.e. it is not the
    /// first occurrence of its base name).
    pub fn is_suffixed(&self) -> bool {
        self.base_name != self.name
    }

    /// The segments of this name. Only the last one differs from
    /// [`VariableName::base_segments`], and only for suffixed names.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The `Type__field` prefix of this name.
    pub fn type_and_field(&self) -> String {
        self.type_and_field_segments().join(SEGMENT_SEPARATOR)
    }

    pub fn type_and_field_segments(&self) -> &[String] {
        &self.base_segments[..2]
    }
}
impl std::fmt::Display for VariableName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name.as_str())
    }
}

/// Issues unique [`VariableName`]s for a single generated document.
#[derive(Debug, Default)]
pub struct VariableNamer {
    issued: HashSet<String>,
    next_suffix: HashMap<String, usize>,
}
impl VariableNamer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn derive(
        &mut self,
        type_name: &str,
        field_name: &str,
        argument_name: Option<&str>,
    ) -> VariableName {
        let mut base_segments = vec![type_name.to_string(), field_name.to_string()];
        base_segments.extend(argument_name.map(str::to_string));
        let base_name = base_segments.join(SEGMENT_SEPARATOR);

        if self.issued.insert(base_name.to_owned()) {
            return VariableName {
                base_name: base_name.to_owned(),
                base_segments: base_segments.to_owned(),
                name: base_name,
                segments: base_segments,
            };
        }

        let next_suffix = self.next_suffix.entry(base_name.to_owned())
            .or_insert(2);
        loop {
            let suffix = format!("_{next_suffix}");
            *next_suffix += 1;
            let name = format!("{base_name}{suffix}");
            if self.issued.insert(name.to_owned()) {
                let mut segments = base_segments.to_owned();
                if let Some(last_segment) = segments.last_mut() {
                    last_segment.push_str(suffix.as_str());
                }
                return VariableName {
                    base_name,
                    base_segments,
                    name,
                    segments,
                };
            }
        }
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }
}

/// Split a variable name (or provider pattern) into its segments.
///
/// Segments are separated by a `__` that does not directly follow another
/// separator, so `a___b` splits into `a` and `_b`, and `a____b` into `a` and
/// `__b`. The name must decompose into 2 or 3 non-empty segments.
pub fn split_segments(name: &str) -> Result<Vec<&str>> {
    let bytes = name.as_bytes();
    let mut segments = vec![];
    let mut segment_start = 0;
    let mut i = 0;
    while i + 1 < bytes.len() {
        let is_separator = bytes[i] == b'_'
            && bytes[i + 1] == b'_'
            && !(i >= 2 && bytes[i - 2] == b'_' && bytes[i - 1] == b'_');
        if is_separator {
            segments.push(&name[segment_start..i]);
            i += 2;
            segment_start = i;
        } else {
            i += 1;
        }
    }
    segments.push(&name[segment_start..]);

    if !(2..=3).contains(&segments.len())
        || segments.iter().any(|segment| segment.is_empty()) {
        return Err(GenerationError::InvalidVariableNameFormat {
            name: name.to_string(),
        });
    }

    Ok(segments)
}
