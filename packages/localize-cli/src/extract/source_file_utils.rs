//! Source File Utilities
//!
//! Recognizers for the two shapes a `$localize` call site takes in compiled
//! code:
//!
//! ```js
//! $localize`Hello, ${name}!`;
//! $localize(__makeTemplateObject(["Hello, ", "!"], ["Hello, ", "!"]), name);
//! ```
//!
//! Both produce the same [`TemplateParts`].

use crate::extract::ExtractError;
use localize::i18n::TemplateParts;
use oxc_ast::ast::{ArrayExpression, ArrayExpressionElement, CallExpression, Expression};
use oxc_semantic::Scoping;
use oxc_span::GetSpan;
use oxc_syntax::operator::LogicalOperator;

/// Name of the helper TypeScript emits for tagged templates in ES5 output.
const MAKE_TEMPLATE_OBJECT: &str = "__makeTemplateObject";

/// What a recognizer needs to know about the file being walked.
pub struct RecognizeContext<'s> {
    pub source_text: &'s str,
    pub scoping: &'s Scoping,
    pub localize_name: &'s str,
}

impl<'s> RecognizeContext<'s> {
    /// Whether `expr` is an identifier named `localize_name` that does not
    /// resolve to any declaration in the file.
    pub fn is_global_localize(&self, expr: &Expression<'_>) -> bool {
        let Expression::Identifier(ident) = expr else {
            return false;
        };
        if ident.name.as_str() != self.localize_name {
            return false;
        }
        match ident.reference_id.get() {
            Some(reference_id) => self.scoping.get_reference(reference_id).symbol_id().is_none(),
            None => true,
        }
    }

    fn source_of(&self, expr: &Expression<'_>) -> String {
        expr.span().source_text(self.source_text).to_string()
    }
}

/// Recognizes one syntactic form of `$localize` call site.
pub trait LocalizeRecognizer: Send + Sync {
    /// `None` when `expr` is not a call site of this form.
    fn recognize(
        &self,
        expr: &Expression<'_>,
        ctx: &RecognizeContext<'_>,
    ) -> Option<Result<TemplateParts, ExtractError>>;
}

/// `` $localize`...` ``
#[derive(Debug, Default)]
pub struct TaggedTemplateRecognizer;

impl LocalizeRecognizer for TaggedTemplateRecognizer {
    fn recognize(
        &self,
        expr: &Expression<'_>,
        ctx: &RecognizeContext<'_>,
    ) -> Option<Result<TemplateParts, ExtractError>> {
        let Expression::TaggedTemplateExpression(tagged) = expr else {
            return None;
        };
        if !ctx.is_global_localize(&tagged.tag) {
            return None;
        }

        let mut cooked = Vec::with_capacity(tagged.quasi.quasis.len());
        let mut raw = Vec::with_capacity(tagged.quasi.quasis.len());
        for quasi in &tagged.quasi.quasis {
            let Some(cooked_value) = &quasi.value.cooked else {
                return Some(Err(ExtractError::InvalidEscape {
                    raw: quasi.value.raw.to_string(),
                }));
            };
            cooked.push(cooked_value.to_string());
            raw.push(quasi.value.raw.to_string());
        }
        let substitutions = tagged.quasi.expressions.iter().map(|e| ctx.source_of(e)).collect();

        Some(Ok(TemplateParts::new(cooked, raw, substitutions)))
    }
}

/// `$localize(parts, ...substitutions)` where `parts` is an array of strings,
/// a `__makeTemplateObject(cooked, raw)` call, or the cached
/// `t || (t = __makeTemplateObject(cooked, raw))` form.
#[derive(Debug, Default)]
pub struct LocalizeCallRecognizer;

impl LocalizeRecognizer for LocalizeCallRecognizer {
    fn recognize(
        &self,
        expr: &Expression<'_>,
        ctx: &RecognizeContext<'_>,
    ) -> Option<Result<TemplateParts, ExtractError>> {
        let Expression::CallExpression(call) = expr else {
            return None;
        };
        if !ctx.is_global_localize(&call.callee) {
            return None;
        }

        let parts = call
            .arguments
            .first()
            .and_then(|arg| arg.as_expression())
            .ok_or(ExtractError::UnexpectedMessageParts)
            .and_then(unwrap_message_parts);
        let (cooked, raw) = match parts {
            Ok(parts) => parts,
            Err(error) => return Some(Err(error)),
        };

        let mut substitutions = Vec::with_capacity(call.arguments.len().saturating_sub(1));
        for arg in call.arguments.iter().skip(1) {
            match arg.as_expression() {
                Some(expr) => substitutions.push(ctx.source_of(expr)),
                None => return Some(Err(ExtractError::UnexpectedSubstitution)),
            }
        }

        Some(Ok(TemplateParts::new(cooked, raw, substitutions)))
    }
}

/// Read the `(cooked, raw)` strings from the first argument of a call form.
fn unwrap_message_parts(expr: &Expression<'_>) -> Result<(Vec<String>, Vec<String>), ExtractError> {
    match strip_parentheses(expr) {
        Expression::ArrayExpression(array) => {
            let cooked = unwrap_string_array(array)?;
            Ok((cooked.clone(), cooked))
        }
        Expression::CallExpression(call) if is_make_template_object(call) => {
            let mut args = call.arguments.iter().map(|arg| arg.as_expression().map(strip_parentheses));
            match (args.next().flatten(), args.next().flatten()) {
                (Some(Expression::ArrayExpression(cooked)), Some(Expression::ArrayExpression(raw))) => {
                    Ok((unwrap_string_array(cooked)?, unwrap_string_array(raw)?))
                }
                _ => Err(ExtractError::UnexpectedMessageParts),
            }
        }
        Expression::LogicalExpression(logical) if logical.operator == LogicalOperator::Or => {
            match strip_parentheses(&logical.right) {
                Expression::AssignmentExpression(assignment) => unwrap_message_parts(&assignment.right),
                _ => Err(ExtractError::UnexpectedMessageParts),
            }
        }
        _ => Err(ExtractError::UnexpectedMessageParts),
    }
}

fn unwrap_string_array(array: &ArrayExpression<'_>) -> Result<Vec<String>, ExtractError> {
    array
        .elements
        .iter()
        .map(|element| match element {
            ArrayExpressionElement::StringLiteral(literal) => Ok(literal.value.to_string()),
            _ => Err(ExtractError::UnexpectedMessageParts),
        })
        .collect()
}

fn is_make_template_object(call: &CallExpression<'_>) -> bool {
    match strip_parentheses(&call.callee) {
        Expression::Identifier(ident) => ident.name.as_str() == MAKE_TEMPLATE_OBJECT,
        Expression::StaticMemberExpression(member) => member.property.name.as_str() == MAKE_TEMPLATE_OBJECT,
        _ => false,
    }
}

fn strip_parentheses<'e, 'a>(mut expr: &'e Expression<'a>) -> &'e Expression<'a> {
    while let Expression::ParenthesizedExpression(paren) = expr {
        expr = &paren.expression;
    }
    expr
}
