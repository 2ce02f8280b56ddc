//! Component display name.
//!
//! A static `displayName` string wins over the name the component is bound
//! to.

use swc_ecma_ast::{Expr, Lit};

use super::Handler;
use crate::core::data::Documentation;
use crate::core::discovery::ComponentDefinition;
use crate::core::file_context::FileContext;
use crate::core::utils::{literal_key, str_value};

pub const DISPLAY_NAME_MEMBER: &str = "displayName";

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayNameHandler;

impl Handler for DisplayNameHandler {
    fn handle<'a>(
        &self,
        documentation: &mut Documentation,
        component: &ComponentDefinition<'a>,
        ctx: &FileContext<'a>,
    ) {
        let explicit = component
            .member_value(ctx, DISPLAY_NAME_MEMBER)
            .and_then(|value| ctx.resolve_to_value(value))
            .and_then(|value| match value {
                Expr::Lit(Lit::Str(s)) => Some(str_value(s)),
                Expr::Tpl(_) => literal_key(value),
                _ => None,
            });

        if let Some(name) = explicit.or_else(|| component.name.clone()) {
            documentation.display_name = Some(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::discovery::find_all_components;
    use crate::core::options::AnalyzeOptions;
    use crate::core::test_utils::parse_module;

    use super::*;

    fn display_names(code: &str) -> Vec<Option<String>> {
        let parsed = parse_module(code);
        let options = AnalyzeOptions::default();
        let ctx = FileContext::new(&parsed, &options);
        find_all_components(&ctx)
            .iter()
            .map(|component| {
                let mut documentation = Documentation::new();
                DisplayNameHandler.handle(&mut documentation, component, &ctx);
                documentation.display_name
            })
            .collect()
    }

    #[test]
    fn test_binding_name() {
        assert_eq!(
            display_names("const Card = () => <div />;"),
            vec![Some("Card".to_string())]
        );
    }

    #[test]
    fn test_explicit_display_name() {
        assert_eq!(
            display_names(
                r#"
import React from 'react';
const NAME = 'Fancy';
const A = React.createClass({ displayName: 'Legacy', render() {} });
class B extends React.Component { static displayName = NAME; }
const C = () => <div />;
C.displayName = `Templated`;
export default React.createClass({ displayName: 'Exported', render() {} });
"#
            ),
            vec![
                Some("Legacy".to_string()),
                Some("Fancy".to_string()),
                Some("Templated".to_string()),
                Some("Exported".to_string())
            ]
        );
    }

    #[test]
    fn test_anonymous() {
        assert_eq!(
            display_names("export default () => <div />;"),
            vec![None]
        );
    }
}
