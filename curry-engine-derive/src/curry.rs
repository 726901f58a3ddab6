//! Implementation of the `curry!` procedural macro.
//!
//! # Supported Input Forms
//!
//! 1. Closure form: `curry!(|a: i32, b: i32| body)`
//! 2. Function path + arity form: `curry!(function_name, arity)`
//!
//! # Generated Code Structure
//!
//! Both forms expand to a call to `curry_engine::engine::curry_fn`, so the
//! result is a runtime `Curried` that accepts argument batches of any size.
//! For `curry!(add_three, 3)` the macro generates:
//!
//! ```text
//! ::curry_engine::engine::curry_fn(
//!     move |__curry_argument_0, __curry_argument_1, __curry_argument_2| {
//!         add_three(__curry_argument_0, __curry_argument_1, __curry_argument_2)
//!     }
//! )
//! ```
//!
//! The wrapper closure pins the declared arity, so a path whose real arity
//! differs fails to compile at the call inside the wrapper.

use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, ExprClosure, ExprLit, ExprPath, Lit, Token};

enum CurryInput {
    Closure(ExprClosure),
    FunctionWithArity { function: ExprPath, arity: usize },
}

/// Largest arity `curry_engine::engine::Function` is implemented for.
const MAXIMUM_ARITY: usize = 8;

pub fn curry_impl(input: TokenStream) -> TokenStream {
    let expanded = parse_curry_input(input.into())
        .map_or_else(|error| error.to_compile_error(), |input| generate_engine_call(&input));

    TokenStream::from(expanded)
}

fn parse_curry_input(input: TokenStream2) -> syn::Result<CurryInput> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let mut expressions = parser.parse2(input)?.into_iter();

    match (expressions.next(), expressions.next(), expressions.next()) {
        (Some(expression), None, None) => parse_single_expression(expression),
        (Some(function), Some(arity), None) => parse_function_with_arity(function, arity),
        (_, _, Some(extra)) => Err(syn::Error::new(
            extra.span(),
            "curry! accepts a closure, or a function path followed by its arity",
        )),
        (None, _, _) => Err(syn::Error::new(
            Span::call_site(),
            "curry! accepts a closure, or a function path followed by its arity",
        )),
    }
}

fn parse_single_expression(expression: Expr) -> syn::Result<CurryInput> {
    match expression {
        Expr::Closure(closure) => {
            check_arity(closure.inputs.len(), closure.span())?;
            Ok(CurryInput::Closure(closure))
        }
        Expr::Path(path) => Err(syn::Error::new(
            path.span(),
            "curry! with a function path requires its arity: curry!(function_name, 2)",
        )),
        other => Err(syn::Error::new(
            other.span(),
            "curry! accepts a closure, or a function path followed by its arity",
        )),
    }
}

fn parse_function_with_arity(function: Expr, arity: Expr) -> syn::Result<CurryInput> {
    let function = match function {
        Expr::Path(path) => path,
        other => {
            return Err(syn::Error::new(
                other.span(),
                "curry! expected a function name or path",
            ));
        }
    };

    let arity = match arity {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal_integer),
            ..
        }) => {
            let arity = literal_integer.base10_parse::<usize>()?;
            check_arity(arity, literal_integer.span())?;
            arity
        }
        other => {
            return Err(syn::Error::new(
                other.span(),
                "curry! expected an integer literal for arity",
            ));
        }
    };

    Ok(CurryInput::FunctionWithArity { function, arity })
}

fn check_arity(arity: usize, span: Span) -> syn::Result<()> {
    if arity > MAXIMUM_ARITY {
        return Err(syn::Error::new(
            span,
            format!("curry! supports at most {MAXIMUM_ARITY} arguments, found {arity}"),
        ));
    }
    Ok(())
}

fn generate_engine_call(input: &CurryInput) -> TokenStream2 {
    let target = match input {
        CurryInput::Closure(closure) => quote! { #closure },
        CurryInput::FunctionWithArity { function, arity } => {
            let arguments: Vec<Ident> = (0..*arity)
                .map(|index| format_ident!("__curry_argument_{}", index))
                .collect();
            quote! {
                move |#(#arguments),*| #function(#(#arguments),*)
            }
        }
    };

    quote! {
        ::curry_engine::engine::curry_fn(#target)
    }
}
