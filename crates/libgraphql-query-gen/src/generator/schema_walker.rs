use crate::ast;
use crate::generator::Configuration;
use crate::generator::GeneratedQuery;
use crate::generator::GenerationError;
use crate::generator::VariableName;
use crate::generator::VariableNamer;
use crate::generator::VariableValues;
use crate::generator::default_values;
use crate::generator::provider;
use crate::schema::OperationKind;
use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::Parameter;
use crate::types::UnionType;
use rand::Rng;
use std::collections::HashMap;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, GenerationError>;

/// How a selection set is filled in.
#[derive(Clone, Copy, Debug, PartialEq)]
enum SelectionMode {
    /// Fields are drawn per the configured breadth and depth probabilities.
    Sampled,

    /// A single field is selected, preferring scalar and enum fields. Used
    /// beneath fields that were force-included.
    Minimal,
}

/// Recursive-descent walker that builds one random operation against a
/// [`Schema`].
///
/// Selection-set levels are counted from the root selection set (level 0). A
/// composite field on level `d` may only be selected when `d < max_depth`
/// and its type can reach a scalar or enum field within the remaining
/// levels.
pub(crate) struct SchemaWalker<'a, R: Rng> {
    composite_type_count: usize,
    config: &'a Configuration,
    leaf_reachability: HashMap<(&'a str, usize), bool>,
    namer: VariableNamer,
    rng: &'a mut R,
    schema: &'a Schema,
    variable_definitions: Vec<ast::query::VariableDefinition>,
    variable_values: VariableValues,
}
impl<'a, R: Rng> SchemaWalker<'a, R> {
    pub fn new(schema: &'a Schema, config: &'a Configuration, rng: &'a mut R) -> Self {
        Self {
            composite_type_count: schema.all_types()
                .values()
                .filter(|graphql_type| graphql_type.is_composite())
                .count(),
            config,
            leaf_reachability: HashMap::new(),
            namer: VariableNamer::new(),
            rng,
            schema,
            variable_definitions: vec![],
            variable_values: VariableValues::new(),
        }
    }

    pub fn generate(mut self) -> Result<GeneratedQuery> {
        self.config.validate()?;

        let operation_kind = self.config.operation_kind;
        let root_type = self.schema.root_operation_type(operation_kind)
            .ok_or(GenerationError::UndefinedRootOperationType {
                operation: operation_kind,
            })?;
        let root_type_name = root_type.name();
        log::debug!(
            "Generating a random {operation_kind} rooted at `{root_type_name}` \
            (max_depth={}, breadth_probability={}, depth_probability={}).",
            self.config.max_depth,
            self.config.breadth_probability,
            self.config.depth_probability,
        );

        if !self.reaches_leaf(root_type_name, self.config.max_depth) {
            return Err(GenerationError::SchemaExhausted {
                depth: self.config.max_depth,
                type_name: root_type_name.to_string(),
            });
        }

        let selection_set = self.build_field_selections(
            root_type,
            /* depth = */ 0,
            SelectionMode::Sampled,
            /* single_field = */ operation_kind == OperationKind::Subscription,
        )?;

        log::debug!(
            "Generated {} variable(s) for the {operation_kind}.",
            self.variable_values.len(),
        );

        let position = ast::AstPos::default();
        let variable_definitions = self.variable_definitions;
        let operation = match operation_kind {
            OperationKind::Mutation => ast::query::OperationDefinition::Mutation(
                ast::query::Mutation {
                    position,
                    name: Some(operation_name(operation_kind).to_string()),
                    variable_definitions,
                    directives: vec![],
                    selection_set,
                },
            ),
            OperationKind::Query => ast::query::OperationDefinition::Query(
                ast::query::Query {
                    position,
                    name: Some(operation_name(operation_kind).to_string()),
                    variable_definitions,
                    directives: vec![],
                    selection_set,
                },
            ),
            OperationKind::Subscription => ast::query::OperationDefinition::Subscription(
                ast::query::Subscription {
                    position,
                    name: Some(operation_name(operation_kind).to_string()),
                    variable_definitions,
                    directives: vec![],
                    selection_set,
                },
            ),
        };

        Ok(GeneratedQuery {
            query_document: ast::query::Document {
                definitions: vec![ast::query::Definition::Operation(operation)],
            },
            variable_values: self.variable_values,
        })
    }

    fn build_arguments(
        &mut self,
        parent_type_name: &str,
        field: &'a Field,
    ) -> Result<Vec<(String, ast::query::Value)>> {
        let mut arguments = vec![];
        for param in field.parameters().values() {
            if !self.config.considers_argument(param) {
                continue;
            }

            let var_name = self.namer.derive(
                parent_type_name,
                field.name(),
                Some(param.name()),
            );
            let value = self.resolve_value(&var_name, param)?;

            self.variable_definitions.push(ast::query::VariableDefinition {
                position: ast::AstPos::default(),
                name: var_name.to_string(),
                var_type: param.type_annotation().to_ast_type(),
                default_value: None,
            });
            self.variable_values.insert(var_name.to_string(), value);
            arguments.push((
                param.name().to_string(),
                ast::query::Value::Variable(var_name.to_string()),
            ));
        }
        Ok(arguments)
    }

    fn build_field(
        &mut self,
        parent_type_name: &str,
        field: &'a Field,
        depth: usize,
        mode: SelectionMode,
    ) -> Result<ast::query::Field> {
        let arguments = self.build_arguments(parent_type_name, field)?;

        let field_type_name = field.type_annotation().innermost_type_name();
        let field_type = self.lookup_type(field_type_name)?;
        let selection_set = if field_type.is_composite() {
            self.build_selection_set(field_type, depth + 1, mode)?
        } else {
            empty_selection_set()
        };

        Ok(ast::query::Field {
            position: ast::AstPos::default(),
            alias: None,
            name: field.name().to_string(),
            arguments,
            directives: vec![],
            selection_set,
        })
    }

    fn build_field_selections(
        &mut self,
        parent_type: &'a GraphQLType,
        depth: usize,
        mode: SelectionMode,
        single_field: bool,
    ) -> Result<ast::query::SelectionSet> {
        let parent_type_name = parent_type.name();
        let candidates = self.candidate_fields(parent_type, depth)?;
        if candidates.is_empty() {
            return Err(GenerationError::SchemaExhausted {
                depth,
                type_name: parent_type_name.to_string(),
            });
        }

        let mut selected = vec![];
        match mode {
            SelectionMode::Sampled => {
                for (field, is_composite) in candidates.iter().copied() {
                    if single_field && !selected.is_empty() {
                        break;
                    }
                    if !self.rng.random_bool(self.config.breadth_probability) {
                        continue;
                    }
                    if is_composite
                        && !self.rng.random_bool(self.config.depth_probability) {
                        log::trace!(
                            "Not descending into `{parent_type_name}.{}` at depth \
                            {depth}.",
                            field.name(),
                        );
                        continue;
                    }
                    selected.push((field, SelectionMode::Sampled));
                }

                if selected.is_empty() {
                    let (forced, _) = candidates[0];
                    log::debug!(
                        "No field of `{parent_type_name}` was sampled at depth \
                        {depth}; forcing `{}`.",
                        forced.name(),
                    );
                    selected.push((forced, SelectionMode::Minimal));
                }
            },

            SelectionMode::Minimal => {
                let (field, _) = candidates.iter()
                    .copied()
                    .find(|(_, is_composite)| !is_composite)
                    .unwrap_or(candidates[0]);
                selected.push((field, SelectionMode::Minimal));
            },
        }

        let mut items = vec![];
        for (field, field_mode) in selected {
            items.push(ast::query::Selection::Field(
                self.build_field(parent_type_name, field, depth, field_mode)?,
            ));
        }

        Ok(ast::query::SelectionSet {
            span: (ast::AstPos::default(), ast::AstPos::default()),
            items,
        })
    }

    fn build_selection_set(
        &mut self,
        composite_type: &'a GraphQLType,
        depth: usize,
        mode: SelectionMode,
    ) -> Result<ast::query::SelectionSet> {
        match composite_type {
            GraphQLType::Union(union_type) =>
                self.build_union_selections(union_type, depth, mode),
            _ => self.build_field_selections(
                composite_type,
                depth,
                mode,
                /* single_field = */ false,
            ),
        }
    }

    /// A union is selected through one inline fragment per selected member.
    /// Fields of later fragments whose response name was already used by an
    /// earlier fragment are aliased as `<field>_<Member>` (numbered when that
    /// name is itself taken).
    fn build_union_selections(
        &mut self,
        union_type: &'a UnionType,
        depth: usize,
        mode: SelectionMode,
    ) -> Result<ast::query::SelectionSet> {
        let budget = self.config.max_depth.saturating_sub(depth);
        let mut candidates = vec![];
        for member_name in union_type.member_names() {
            if self.reaches_leaf(member_name, budget) {
                candidates.push(self.lookup_type(member_name)?);
            }
        }
        if candidates.is_empty() {
            return Err(GenerationError::SchemaExhausted {
                depth,
                type_name: union_type.name().to_string(),
            });
        }

        let mut selected = vec![];
        if mode == SelectionMode::Sampled {
            for member in candidates.iter().copied() {
                if self.rng.random_bool(self.config.breadth_probability) {
                    selected.push((member, SelectionMode::Sampled));
                }
            }
        }
        if selected.is_empty() {
            log::debug!(
                "No member of `{}` was sampled at depth {depth}; forcing `{}`.",
                union_type.name(),
                candidates[0].name(),
            );
            selected.push((candidates[0], SelectionMode::Minimal));
        }

        let mut member_selections = vec![];
        for (member, member_mode) in selected {
            member_selections.push((member, self.build_field_selections(
                member,
                depth,
                member_mode,
                /* single_field = */ false,
            )?));
        }

        // Aliases must not collide with a field selected (unaliased) by any
        // fragment, including fragments that come later.
        let unaliased_names = member_selections.iter()
            .flat_map(|(_, selection_set)| selection_set.items.iter())
            .filter_map(|selection| match selection {
                ast::query::Selection::Field(field) => Some(field.name.to_owned()),
                _ => None,
            })
            .collect::<HashSet<_>>();

        let mut response_names = HashSet::new();
        let mut items = vec![];
        for (member, mut member_selection_set) in member_selections {
            for selection in member_selection_set.items.iter_mut() {
                let ast::query::Selection::Field(field) = selection else {
                    continue;
                };
                if response_names.contains(field.name.as_str()) {
                    let alias = unused_alias(
                        format!("{}_{}", field.name, member.name()),
                        &unaliased_names,
                        &response_names,
                    );
                    field.alias = Some(alias);
                }
                response_names.insert(
                    field.alias.as_ref().unwrap_or(&field.name).to_owned(),
                );
            }

            items.push(ast::query::Selection::InlineFragment(
                ast::query::InlineFragment {
                    position: ast::AstPos::default(),
                    type_condition: Some(ast::query::TypeCondition::On(
                        member.name().to_string(),
                    )),
                    directives: vec![],
                    selection_set: member_selection_set,
                },
            ));
        }

        Ok(ast::query::SelectionSet {
            span: (ast::AstPos::default(), ast::AstPos::default()),
            items,
        })
    }

    /// The fields of `parent_type` that may be selected on level `depth`, in
    /// declaration order, each paired with whether it is composite.
    fn candidate_fields(
        &mut self,
        parent_type: &'a GraphQLType,
        depth: usize,
    ) -> Result<Vec<(&'a Field, bool)>> {
        let Some(fields) = parent_type.fields() else {
            return Err(GenerationError::UndefinedTypeReference {
                type_name: parent_type.name().to_string(),
            });
        };

        let mut candidates = vec![];
        for field in fields.values() {
            let field_type_name = field.type_annotation().innermost_type_name();
            let field_type = self.lookup_type(field_type_name)?;
            if field_type.is_leaf() {
                candidates.push((field, false));
            } else if depth < self.config.max_depth
                && self.reaches_leaf(field_type_name, self.config.max_depth - depth - 1) {
                candidates.push((field, true));
            } else {
                log::trace!(
                    "Skipping `{}.{}` at depth {depth}: no scalar or enum \
                    field is reachable within max_depth.",
                    parent_type.name(),
                    field.name(),
                );
            }
        }
        Ok(candidates)
    }

    fn lookup_type(&self, type_name: &str) -> Result<&'a GraphQLType> {
        self.schema.lookup_type(type_name)
            .ok_or_else(|| GenerationError::UndefinedTypeReference {
                type_name: type_name.to_string(),
            })
    }

    /// Indicates if a selection set on `type_name` can contain a scalar or
    /// enum field when at most `budget` further composite levels may be
    /// opened beneath it.
    ///
    /// A shortest path to a leaf never visits the same type twice, so budgets
    /// beyond the number of composite types are equivalent and share a memo
    /// entry.
    fn reaches_leaf(&mut self, type_name: &'a str, budget: usize) -> bool {
        let budget = budget.min(self.composite_type_count);
        if let Some(reachable) = self.leaf_reachability.get(&(type_name, budget)) {
            return *reachable;
        }

        let schema = self.schema;
        let reachable = match schema.lookup_type(type_name) {
            None => false,
            Some(graphql_type) if graphql_type.is_leaf() => true,
            Some(GraphQLType::Union(union_type)) =>
                union_type.member_names()
                    .iter()
                    .any(|member_name| self.reaches_leaf(member_name, budget)),
            Some(graphql_type) => match graphql_type.fields() {
                Some(fields) => fields.values().any(|field| {
                    let field_type_name =
                        field.type_annotation().innermost_type_name();
                    match schema.lookup_type(field_type_name) {
                        Some(field_type) if field_type.is_leaf() => true,
                        Some(field_type) if field_type.is_composite() =>
                            budget > 0
                                && self.reaches_leaf(field_type_name, budget - 1),
                        _ => false,
                    }
                }),
                None => false,
            },
        };

        self.leaf_reachability.insert((type_name, budget), reachable);
        reachable
    }

    /// Resolve a value for a generated variable.
    ///
    /// Providers are consulted for the full variable name, then (for suffixed
    /// names) the unsuffixed base name, and finally a `Type__field` provider
    /// whose value is an object keyed by argument name. Without a match the
    /// built-in value for the argument's type is used.
    fn resolve_value(
        &mut self,
        var_name: &VariableName,
        param: &Parameter,
    ) -> Result<serde_json::Value> {
        let schema = self.schema;
        let argument_type =
            schema.lookup_type(param.type_annotation().innermost_type_name());

        if let Some(provider_map) = self.config.provider_map.as_ref() {
            let mut lookups = vec![(var_name.as_str(), var_name.segments())];
            if var_name.is_suffixed() {
                lookups.push((var_name.base_name(), var_name.base_segments()));
            }
            for (lookup_name, lookup_segments) in lookups {
                let provider = provider::find_provider_for_segments(
                    lookup_name,
                    lookup_segments,
                    provider_map,
                )?;
                if let Some(provider) = provider {
                    log::trace!("Resolved `{var_name}` using a provider for `{lookup_name}`.");
                    return Ok(provider.value(&self.variable_values, argument_type));
                }
            }

            let type_and_field = var_name.type_and_field();
            let provider = provider::find_provider_for_segments(
                type_and_field.as_str(),
                var_name.type_and_field_segments(),
                provider_map,
            )?;
            if let Some(provider) = provider {
                let field_value = provider.value(&self.variable_values, argument_type);
                if let Some(value) = field_value.get(param.name()) {
                    log::trace!("Resolved `{var_name}` using a provider for `{type_and_field}`.");
                    return Ok(value.clone());
                }
            }
        }

        if self.config.require_provider_match {
            return Err(provider::no_provider_found(
                var_name.as_str(),
                self.config.provider_map.as_ref(),
            ));
        }

        default_values::value_for_type(schema, param.type_annotation(), &mut *self.rng)
    }
}

/// `preferred`, or `preferred` with the smallest numeric suffix (from `_2`)
/// that is used by neither set.
fn unused_alias(
    preferred: String,
    unaliased_names: &HashSet<String>,
    response_names: &HashSet<String>,
) -> String {
    let is_taken = |name: &str|
        unaliased_names.contains(name) || response_names.contains(name);
    if !is_taken(preferred.as_str()) {
        return preferred;
    }
    let mut suffix = 2;
    loop {
        let alias = format!("{preferred}_{suffix}");
        if !is_taken(alias.as_str()) {
            return alias;
        }
        suffix += 1;
    }
}

fn empty_selection_set() -> ast::query::SelectionSet {
    ast::query::SelectionSet {
        span: (ast::AstPos::default(), ast::AstPos::default()),
        items: vec![],
    }
}

pub fn operation_name(operation_kind: OperationKind) -> &'static str {
    match operation_kind {
        OperationKind::Mutation => "RandomMutation",
        OperationKind::Query => "RandomQuery",
        OperationKind::Subscription => "RandomSubscription",
    }
}
