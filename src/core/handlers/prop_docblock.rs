//! Prop descriptions from doc comments inside the `propTypes` object.

use swc_common::Spanned;
use swc_ecma_ast::Prop;

use super::{Handler, expand_prop_entries, prop_types_object};
use crate::core::data::Documentation;
use crate::core::discovery::ComponentDefinition;
use crate::core::file_context::FileContext;

#[derive(Debug, Clone, Copy, Default)]
pub struct PropDocblockHandler;

impl Handler for PropDocblockHandler {
    fn handle<'a>(
        &self,
        documentation: &mut Documentation,
        component: &ComponentDefinition<'a>,
        ctx: &FileContext<'a>,
    ) {
        let Some(object) = prop_types_object(component, ctx) else {
            return;
        };

        let descriptions = expand_prop_entries(ctx, object, |prop| {
            let name = match prop {
                Prop::KeyValue(kv) => ctx.property_name(&kv.key)?,
                Prop::Shorthand(ident) => ident.sym.to_string(),
                _ => return None,
            };
            Some((name, ctx.docblock_at(prop.span().lo)?))
        });
        for (name, description) in descriptions {
            documentation.prop_descriptor_mut(name).description = Some(description);
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

    #[test]
    fn test_prop_descriptions() {
        let parsed = parse_module(
            r#"
import React from 'react';
import PropTypes from 'prop-types';

const shared = {
  /** Shared handler. */
  onClick: PropTypes.func,
};

function Button() { return <button />; }

Button.propTypes = {
  /**
   * Text on the button.
   */
  label: PropTypes.string,
  // not a doc comment
  size: PropTypes.number,
  ...shared,
};
"#,
        );
        let options = AnalyzeOptions::default();
        let ctx = FileContext::new(&parsed, &options);
        let components = find_all_components(&ctx);
        let mut documentation = Documentation::new();
        PropDocblockHandler.handle(&mut documentation, &components[0], &ctx);

        let descriptions: Vec<(&str, Option<&str>)> = documentation
            .props
            .iter()
            .map(|(name, prop)| (name.as_str(), prop.description.as_deref()))
            .collect();
        assert_eq!(
            descriptions,
            vec![
                ("label", Some("Text on the button.")),
                ("onClick", Some("Shared handler."))
            ]
        );
    }
}
