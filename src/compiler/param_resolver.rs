use crate::{
    Config, UnsupportedParent,
    ast::{AExpr, FuncCall, Node, RangeVar, ResTarget, TypeCast},
    catalog::{Catalog, Function, TableName},
    compiler::{ParamColumn, ParamOccurrence, ParamParent, Parameter, ResolveError, TableScope},
    rewrite::ParamNames,
};

/// Assigns a name and a catalog type to every placeholder occurrence.
///
/// Each occurrence is typed from its immediate parent only: the column it is
/// compared against, the function argument slot it fills, the column it is
/// assigned to, or the type it is cast to. The first failure aborts the
/// statement.
pub struct ParamResolver<'a> {
    catalog: &'a dyn Catalog,
    config: &'a Config,
}

impl<'a> ParamResolver<'a> {
    pub fn new(catalog: &'a dyn Catalog, config: &'a Config) -> Self {
        Self { catalog, config }
    }

    /// Resolve `occurrences` in order. `names` holds user chosen names by
    /// ordinal and overrides every inferred name.
    pub fn resolve(
        &self,
        rvs: &[RangeVar],
        occurrences: &[ParamOccurrence],
        names: &ParamNames,
    ) -> Result<Vec<Parameter>, ResolveError> {
        let scope = TableScope::build(self.catalog, rvs);
        let mut params = Vec::with_capacity(occurrences.len());

        for occ in occurrences {
            let number = occ.param.number;
            match &occ.parent {
                ParamParent::LimitOffset => params.push(Self::limit_param(number, "offset", names)),
                ParamParent::LimitCount => params.push(Self::limit_param(number, "limit", names)),
                ParamParent::Node(Node::AExpr(expr)) => {
                    params.push(Self::resolve_expr(&scope, occ, expr, names)?);
                }
                ParamParent::Node(Node::FuncCall(call)) => {
                    params.extend(self.resolve_func(occ, call, names)?);
                }
                ParamParent::Node(Node::ResTarget(target)) => {
                    let default_table = scope.default_table.as_ref();
                    params.push(Self::resolve_target(&scope, default_table, occ, target, names)?);
                }
                ParamParent::Node(Node::TypeCast(cast)) => {
                    params.push(Self::resolve_cast(occ, cast, names)?);
                }
                ParamParent::Node(Node::ParamRef(_)) => params.push(Parameter::untyped(number)),
                // Any other context is not typed here; what happens is up to the config.
                ParamParent::Node(other) => self.unsupported(occ, other)?,
            }
        }

        Ok(params)
    }

    fn limit_param(number: usize, default_name: &str, names: &ParamNames) -> Parameter {
        Parameter::typed(number, ParamColumn {
            name: param_name(names, number, default_name),
            data_type: "integer".to_string(),
            not_null: true,
            is_array: false,
            table: None,
        })
    }

    /// `column <op> $n`: type the placeholder as the first column on the left.
    fn resolve_expr(
        scope: &TableScope,
        occ: &ParamOccurrence,
        expr: &AExpr,
        names: &ParamNames,
    ) -> Result<Parameter, ResolveError> {
        let column_ref = expr
            .lexpr
            .as_deref()
            .and_then(|left| {
                left.descendants().find_map(|n| match n {
                    Node::ColumnRef(c) => Some(c),
                    _ => None,
                })
            })
            .ok_or(ResolveError::NoColumnReference { location: expr.location })?;

        let fields = column_ref.names();
        let (qualifier, key) = match fields.as_slice() {
            [key] => (None, *key),
            [qualifier, key] => (Some(*qualifier), *key),
            [] => return Err(ResolveError::NoColumnReference { location: column_ref.location }),
            _ => {
                return Err(ResolveError::TooManyQualifiers {
                    fields: fields.iter().map(|f| f.to_string()).collect(),
                    location: column_ref.location,
                });
            }
        };

        let matches: Vec<_> = scope
            .candidates(qualifier)
            .into_iter()
            .filter_map(|table| scope.column(table, key).map(|column| (table, column)))
            .collect();

        match matches.as_slice() {
            [] => Err(ResolveError::ColumnNotFound { name: key.to_string(), location: column_ref.location }),
            [(table, column)] => {
                let default_name = occ.name.as_deref().unwrap_or(key);
                Ok(Parameter::typed(occ.param.number, ParamColumn {
                    name: param_name(names, occ.param.number, default_name),
                    data_type: column.type_name.data_type(),
                    not_null: column.is_not_null,
                    is_array: column.is_array,
                    table: Some((*table).clone()),
                }))
            }
            _ => Err(ResolveError::AmbiguousColumn { name: key.to_string(), location: column_ref.location }),
        }
    }

    /// `f(..., $n, ...)`: type the placeholder as the argument slot it fills.
    fn resolve_func(
        &self,
        occ: &ParamOccurrence,
        call: &FuncCall,
        names: &ParamNames,
    ) -> Result<Option<Parameter>, ResolveError> {
        let number = occ.param.number;
        let (function, synthesized) = match self.catalog.get_function(&call.func, call.args.len()) {
            Ok(function) => (function, false),
            Err(err) => {
                tracing::debug!(function = %call.func, error = %err, "unknown function, typing arguments as any");
                (Function::any(call.func.name.clone(), call.args.len()), true)
            }
        };

        let Some((position, label)) = call.args.iter().enumerate().find_map(|(i, arg)| match arg {
            Node::ParamRef(p) if p.number == number => Some((i, None)),
            Node::NamedArgExpr(named) => match named.arg.as_ref() {
                Node::ParamRef(p) if p.number == number => Some((i, named.name.as_deref())),
                _ => None,
            },
            _ => None,
        }) else {
            return Ok(None);
        };

        let arg = function.args.get(position).ok_or_else(|| ResolveError::ArityMismatch {
            function: function.name.clone(),
            location: call.location,
        })?;

        let default_name = occ
            .name
            .as_deref()
            .or(label)
            .or(Some(arg.name.as_str()).filter(|n| !n.is_empty()))
            .unwrap_or(function.name.as_str());

        Ok(Some(Parameter::typed(number, ParamColumn {
            name: param_name(names, number, default_name),
            data_type: arg.type_name.data_type(),
            // Catalog arguments are reported as required; nothing finer is tracked.
            not_null: !synthesized,
            is_array: false,
            table: None,
        })))
    }

    /// `INSERT (col) VALUES ($n)` / `UPDATE SET col = $n`: type as the target column.
    fn resolve_target(
        scope: &TableScope,
        default_table: Option<&TableName>,
        occ: &ParamOccurrence,
        target: &ResTarget,
        names: &ParamNames,
    ) -> Result<Parameter, ResolveError> {
        let key = target.name.as_deref().ok_or_else(|| ResolveError::MissingTypeInfo {
            node: "ResTarget",
            detail: "has no column name".to_string(),
            location: target.location,
        })?;

        let table = match &occ.rv {
            Some(rv) => TableName::from(rv),
            None => default_table.cloned().ok_or_else(|| ResolveError::MissingTypeInfo {
                node: "ResTarget",
                detail: format!("\"{}\" has no table to resolve against", key),
                location: target.location,
            })?,
        };

        let column = scope.column(&table, key).ok_or_else(|| ResolveError::ColumnNotFound {
            name: key.to_string(),
            location: target.location,
        })?;

        Ok(Parameter::typed(occ.param.number, ParamColumn {
            name: param_name(names, occ.param.number, key),
            data_type: column.type_name.data_type(),
            not_null: column.is_not_null,
            is_array: column.is_array,
            table: Some(table),
        }))
    }

    /// `$n::type`: the cast decides.
    fn resolve_cast(occ: &ParamOccurrence, cast: &TypeCast, names: &ParamNames) -> Result<Parameter, ResolveError> {
        let type_name = cast.type_name.as_ref().ok_or_else(|| ResolveError::MissingTypeInfo {
            node: "TypeCast",
            detail: "has no type name".to_string(),
            location: cast.location,
        })?;

        Ok(Parameter::typed(occ.param.number, ParamColumn {
            name: param_name(names, occ.param.number, occ.name.as_deref().unwrap_or("")),
            data_type: type_name.data_type(),
            not_null: true,
            is_array: type_name.is_array(),
            table: None,
        }))
    }

    fn unsupported(&self, occ: &ParamOccurrence, parent: &Node) -> Result<(), ResolveError> {
        match self.config.unsupported_parent {
            UnsupportedParent::Skip => {
                tracing::warn!(
                    param = occ.param.number,
                    parent = parent.kind(),
                    "unsupported reference type, no parameter emitted"
                );
                Ok(())
            }
            UnsupportedParent::Reject => Err(ResolveError::UnsupportedParent {
                kind: parent.kind(),
                location: parent.location().unwrap_or(occ.param.location),
            }),
        }
    }
}

fn param_name(names: &ParamNames, number: usize, default_name: &str) -> String {
    names.get(&number).cloned().unwrap_or_else(|| default_name.to_string())
}

/// Resolve parameter types with the default configuration.
pub fn resolve(
    catalog: &dyn Catalog,
    rvs: &[RangeVar],
    occurrences: &[ParamOccurrence],
    names: &ParamNames,
) -> Result<Vec<Parameter>, ResolveError> {
    let config = Config::default();
    ParamResolver::new(catalog, &config).resolve(rvs, occurrences, names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{AConst, ColumnRef, FuncName, NamedArgExpr, ParamRef, TypeName},
        catalog::{Argument, CatalogError, Table},
        compiler::_tests::fixtures,
    };

    fn p(number: usize) -> ParamRef {
        ParamRef::new(number, 40 + number)
    }

    fn eq(column: &[&str], number: usize) -> AExpr {
        AExpr::binary("=", ColumnRef::new(column, 30), p(number), 32)
    }

    fn no_names() -> ParamNames {
        ParamNames::new()
    }

    fn column(param: &Parameter) -> &ParamColumn {
        param.column.as_ref().unwrap()
    }

    #[test]
    fn limit_and_offset_are_integers() {
        let occs = vec![
            ParamOccurrence::new(p(1), ParamParent::LimitCount),
            ParamOccurrence::new(p(2), ParamParent::LimitOffset),
        ];
        let params = resolve(&fixtures::catalog(), &[], &occs, &no_names()).unwrap();

        assert_eq!(params.len(), 2);
        assert_eq!(params[0].name(), Some("limit"));
        assert_eq!(params[1].name(), Some("offset"));
        assert!(params.iter().all(|p| column(p).data_type == "integer" && column(p).not_null));

        let names = ParamNames::from([(2, "skip".to_string())]);
        let params = resolve(&fixtures::catalog(), &[], &occs, &names).unwrap();
        assert_eq!(params[1].name(), Some("skip"));
    }

    #[test]
    fn comparison_takes_the_column_type() {
        let rvs = vec![RangeVar::new("users", 14)];
        let occs = vec![ParamOccurrence::new(p(1), eq(&["email"], 1))];
        let params = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap();

        let col = column(&params[0]);
        assert_eq!(col.name, "email");
        assert_eq!(col.data_type, "text");
        assert!(!col.not_null);
        assert_eq!(col.table, Some(TableName::new("users")));
    }

    #[test]
    fn column_inside_function_on_the_left() {
        // lower(name) = $1
        let left = FuncCall::new(FuncName::new("lower"), vec![ColumnRef::new(&["name"], 37).into()], 31);
        let expr = AExpr::binary("=", left, p(1), 43);
        let rvs = vec![RangeVar::new("users", 14)];
        let occs = vec![ParamOccurrence::new(p(1), expr)];

        let params = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap();
        assert_eq!(params[0].name(), Some("name"));
        assert_eq!(params[0].data_type(), Some("text"));
    }

    #[test]
    fn unqualified_column_in_two_tables_is_ambiguous() {
        let rvs = vec![RangeVar::new("users", 14), RangeVar::new("posts", 30)];
        let occs = vec![ParamOccurrence::new(p(1), eq(&["id"], 1))];

        let err = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap_err();
        assert_eq!(err, ResolveError::AmbiguousColumn { name: "id".into(), location: 30 });
        assert_eq!(err.to_string(), "column reference \"id\" is ambiguous");
    }

    #[test]
    fn qualifier_by_alias_or_table_name() {
        let rvs = vec![RangeVar::new("users", 14).with_alias("u"), RangeVar::new("posts", 30)];
        let occs = vec![
            ParamOccurrence::new(p(1), eq(&["u", "id"], 1)),
            ParamOccurrence::new(p(2), eq(&["posts", "id"], 2)),
        ];

        let params = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap();
        assert_eq!(column(&params[0]).table, Some(TableName::new("users")));
        assert_eq!(column(&params[1]).table, Some(TableName::new("posts")));
        assert_eq!(params[0].data_type(), Some("pg_catalog.int8"));
    }

    #[test]
    fn unknown_qualifier_searches_every_table() {
        let rvs = vec![RangeVar::new("users", 14)];
        let occs = vec![ParamOccurrence::new(p(1), eq(&["x", "email"], 1))];

        let params = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap();
        let col = column(&params[0]);
        assert_eq!(col.name, "email");
        assert_eq!(col.data_type, "text");
        assert_eq!(col.table, Some(TableName::new("users")));

        let rvs = vec![RangeVar::new("users", 14), RangeVar::new("posts", 21)];
        let occs = vec![ParamOccurrence::new(p(1), eq(&["x", "id"], 1))];
        let err = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap_err();
        assert_eq!(err, ResolveError::AmbiguousColumn { name: "id".into(), location: 30 });
    }

    #[test]
    fn comparison_rename_and_names_override() {
        let rvs = vec![RangeVar::new("users", 14)];
        let occs = vec![ParamOccurrence::new(p(1), eq(&["email"], 1)).with_name("who")];

        let params = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap();
        assert_eq!(params[0].name(), Some("who"));
        assert_eq!(params[0].data_type(), Some("text"));

        let names = ParamNames::from([(1, "contact".to_string())]);
        let params = resolve(&fixtures::catalog(), &rvs, &occs, &names).unwrap();
        assert_eq!(params[0].name(), Some("contact"));
    }

    #[test]
    fn function_argument_name_precedence() {
        let labelled = FuncCall::new(
            FuncName::new("search_posts"),
            vec![NamedArgExpr::new(Some("q"), p(1), 20).into(), p(2).into()],
            7,
        );

        // rename beats the argument label
        let occs = vec![ParamOccurrence::new(p(1), labelled.clone()).with_name("needle")];
        let params = resolve(&fixtures::catalog(), &[], &occs, &no_names()).unwrap();
        assert_eq!(params[0].name(), Some("needle"));
        assert_eq!(params[0].data_type(), Some("text"));

        // label beats the catalog argument name
        let occs = vec![ParamOccurrence::new(p(1), labelled)];
        let params = resolve(&fixtures::catalog(), &[], &occs, &no_names()).unwrap();
        assert_eq!(params[0].name(), Some("q"));

        // unlabelled falls back to the catalog argument name
        let unlabelled = FuncCall::new(FuncName::new("search_posts"), vec![p(1).into(), p(2).into()], 7);
        let occs = vec![ParamOccurrence::new(p(1), unlabelled)];
        let params = resolve(&fixtures::catalog(), &[], &occs, &no_names()).unwrap();
        assert_eq!(params[0].name(), Some("query"));
    }

    #[test]
    fn missing_column_is_reported() {
        let rvs = vec![RangeVar::new("users", 14)];
        let occs = vec![ParamOccurrence::new(p(1), eq(&["ghost"], 1))];

        let err = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap_err();
        assert_eq!(err.to_string(), "column \"ghost\" does not exist");
        assert_eq!(err.sqlstate(), "42703");
    }

    #[test]
    fn comparison_without_column_or_with_too_many_qualifiers() {
        let rvs = vec![RangeVar::new("users", 14)];

        let no_column = AExpr::binary("=", AConst::new(Node::Integer(1), 31), p(1), 33);
        let occs = vec![ParamOccurrence::new(p(1), no_column)];
        let err = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap_err();
        assert_eq!(err, ResolveError::NoColumnReference { location: 33 });

        let occs = vec![ParamOccurrence::new(p(1), eq(&["public", "users", "id"], 1))];
        let err = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap_err();
        assert!(matches!(err, ResolveError::TooManyQualifiers { ref fields, .. } if fields.len() == 3));
    }

    #[test]
    fn unknown_function_falls_back_to_any() {
        let call = FuncCall::new(FuncName::new("unknown_fn"), vec![p(1).into()], 7);
        let occs = vec![ParamOccurrence::new(p(1), call)];

        let params = resolve(&fixtures::catalog(), &[], &occs, &no_names()).unwrap();
        let col = column(&params[0]);
        assert_eq!(col.data_type, "any");
        assert!(!col.not_null);
        assert_eq!(col.name, "unknown_fn");
    }

    #[test]
    fn catalog_function_names_and_types_arguments() {
        let call = FuncCall::new(
            FuncName::new("search_posts"),
            vec![NamedArgExpr::new(Some("q"), p(1), 20).into(), p(2).into()],
            7,
        );
        let occs = vec![
            ParamOccurrence::new(p(1), call.clone()),
            ParamOccurrence::new(p(2), call.clone()),
        ];

        let params = resolve(&fixtures::catalog(), &[], &occs, &no_names()).unwrap();
        assert_eq!(params[0].name(), Some("q"));
        assert_eq!(params[0].data_type(), Some("text"));
        assert!(column(&params[0]).not_null);
        assert_eq!(params[1].name(), Some("max_rows"));
        assert_eq!(params[1].data_type(), Some("pg_catalog.int4"));

        let names = ParamNames::from([(1, "term".to_string())]);
        let params = resolve(&fixtures::catalog(), &[], &occs[..1], &names).unwrap();
        assert_eq!(params[0].name(), Some("term"));
    }

    #[test]
    fn unnamed_catalog_argument_takes_function_name() {
        let call = FuncCall::new(FuncName::new("lower"), vec![p(1).into()], 7);
        let occs = vec![ParamOccurrence::new(p(1), call)];

        let params = resolve(&fixtures::catalog(), &[], &occs, &no_names()).unwrap();
        assert_eq!(params[0].name(), Some("lower"));
        assert_eq!(params[0].data_type(), Some("text"));
    }

    #[test]
    fn other_argument_positions_are_skipped() {
        // unknown_fn(name, 'x', $3)
        let call = FuncCall::new(
            FuncName::new("unknown_fn"),
            vec![ColumnRef::new(&["name"], 18).into(), AConst::string("x", 24).into(), p(3).into()],
            7,
        );
        let occs = vec![ParamOccurrence::new(p(3), call)];

        let params = resolve(&fixtures::catalog(), &[], &occs, &no_names()).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].number, 3);
    }

    struct ShortCatalog;

    impl Catalog for ShortCatalog {
        fn get_table(&self, name: &TableName) -> Result<Table, CatalogError> {
            Err(CatalogError::TableNotFound(name.clone()))
        }

        fn get_function(&self, name: &FuncName, _arity: usize) -> Result<Function, CatalogError> {
            Ok(Function::new(name.name.clone(), vec![Argument::unnamed(TypeName::new("text"))], TypeName::new("text")))
        }
    }

    #[test]
    fn placeholder_past_declared_arguments_is_arity_mismatch() {
        let call = FuncCall::new(FuncName::new("concat"), vec![p(1).into(), p(2).into()], 7);
        let occs = vec![ParamOccurrence::new(p(2), call)];

        let err = resolve(&ShortCatalog, &[], &occs, &no_names()).unwrap_err();
        assert_eq!(err, ResolveError::ArityMismatch { function: "concat".into(), location: 7 });
        assert_eq!(err.to_string(), "incorrect number of arguments to concat");
    }

    #[test]
    fn result_target_uses_its_range_var() {
        // INSERT INTO posts ... SELECT ... FROM users
        let rvs = vec![RangeVar::new("posts", 12), RangeVar::new("users", 60)];
        let rv = RangeVar::new("posts", 12);
        let occs = vec![ParamOccurrence::new(p(1), ResTarget::column("title", 19)).with_rv(rv)];

        let params = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap();
        let col = column(&params[0]);
        assert_eq!(col.name, "title");
        assert!(col.not_null);
        assert_eq!(col.table, Some(TableName::new("posts")));
    }

    #[test]
    fn result_target_falls_back_to_default_table() {
        let rvs = vec![RangeVar::new("users", 7)];
        let occs = vec![ParamOccurrence::new(p(1), ResTarget::assign("tags", p(1), 18))];

        let params = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap();
        let col = column(&params[0]);
        assert_eq!(col.data_type, "text");
        assert!(col.is_array);
    }

    #[test]
    fn result_target_failures() {
        let rvs = vec![RangeVar::new("users", 7)];

        let occs = vec![ParamOccurrence::new(p(1), ResTarget::value(p(1), 18))];
        let err = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap_err();
        assert!(matches!(err, ResolveError::MissingTypeInfo { node: "ResTarget", location: 18, .. }));

        let occs = vec![ParamOccurrence::new(p(1), ResTarget::column("name", 18))];
        let err = resolve(&fixtures::catalog(), &[], &occs, &no_names()).unwrap_err();
        assert!(matches!(err, ResolveError::MissingTypeInfo { node: "ResTarget", .. }));

        let occs = vec![ParamOccurrence::new(p(1), ResTarget::column("nickname", 18))];
        let err = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap_err();
        assert_eq!(err, ResolveError::ColumnNotFound { name: "nickname".into(), location: 18 });
    }

    #[test]
    fn cast_decides_type() {
        let cast = TypeCast::new(p(1), TypeName::qualified("pg_catalog", "text").array(1), 22);
        let occs = vec![ParamOccurrence::new(p(1), cast.clone()).with_name("labels")];

        let params = resolve(&fixtures::catalog(), &[], &occs, &no_names()).unwrap();
        let col = column(&params[0]);
        assert_eq!(col.name, "labels");
        assert_eq!(col.data_type, "pg_catalog.text");
        assert!(col.is_array);
        assert!(col.not_null);

        let bare = TypeCast { type_name: None, ..cast };
        let occs = vec![ParamOccurrence::new(p(1), bare)];
        let err = resolve(&fixtures::catalog(), &[], &occs, &no_names()).unwrap_err();
        assert!(matches!(err, ResolveError::MissingTypeInfo { node: "TypeCast", location: 22, .. }));
    }

    #[test]
    fn bare_placeholder_is_untyped() {
        let occs = vec![ParamOccurrence::new(p(1), p(1))];
        let params = resolve(&fixtures::catalog(), &[], &occs, &no_names()).unwrap();
        assert_eq!(params, vec![Parameter::untyped(1)]);
    }

    #[test]
    fn unsupported_parent_is_skipped_or_rejected() {
        let parent = crate::ast::BoolExpr::and(vec![p(1).into()], 9);
        let occs = vec![
            ParamOccurrence::new(p(1), Node::from(parent)),
            ParamOccurrence::new(p(2), ParamParent::LimitCount),
        ];

        let params = resolve(&fixtures::catalog(), &[], &occs, &no_names()).unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params[0].number, 2);

        let config = Config::strict();
        let err = ParamResolver::new(&fixtures::catalog(), &config)
            .resolve(&[], &occs, &no_names())
            .unwrap_err();
        assert_eq!(err, ResolveError::UnsupportedParent { kind: "BoolExpr", location: 9 });
    }

    #[test]
    fn unknown_tables_do_not_fail_other_columns() {
        let rvs = vec![RangeVar::new("recent_posts", 14), RangeVar::new("users", 30)];
        let occs = vec![ParamOccurrence::new(p(1), eq(&["email"], 1))];

        let params = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap();
        assert_eq!(column(&params[0]).table, Some(TableName::new("users")));
    }

    #[test]
    fn output_follows_input_order_and_first_error_aborts() {
        let rvs = vec![RangeVar::new("users", 14)];
        let occs = vec![
            ParamOccurrence::new(p(2), eq(&["name"], 2)),
            ParamOccurrence::new(p(1), eq(&["email"], 1)),
        ];
        let params = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap();
        assert_eq!(params.iter().map(|p| p.number).collect::<Vec<_>>(), vec![2, 1]);

        let occs = vec![
            ParamOccurrence::new(p(1), eq(&["ghost"], 1)),
            ParamOccurrence::new(p(2), eq(&["id", "x", "y"], 2)),
        ];
        let err = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap_err();
        assert!(matches!(err, ResolveError::ColumnNotFound { .. }));
    }

    #[test]
    fn schema_qualified_range_var() {
        let rvs = vec![RangeVar::new("events", 14).with_schema("audit").with_alias("e")];
        let occs = vec![ParamOccurrence::new(p(1), eq(&["e", "created_at"], 1))];

        let params = resolve(&fixtures::catalog(), &rvs, &occs, &no_names()).unwrap();
        let col = column(&params[0]);
        assert_eq!(col.data_type, "timestamptz");
        assert_eq!(col.table, Some(TableName::qualified("audit", "events")));
    }
}
