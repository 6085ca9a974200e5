mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::ToTokens;
use syn::parse_macro_input;

/// Derives the `symcalc_error::ErrorKind` trait for the given struct.
///
/// The information of the error is customized using the `error` attribute:
///
/// ```ignore
/// use symcalc_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("`{}` is not a known function", name),
///     labels = ["this function"],
///     help = "try `sin`, `cos` or `exp`",
/// )]
/// pub struct UnknownFunction {
///     pub name: String,
/// }
/// ```
///
/// | Tag       | Description                                                                    |
/// | --------- | ------------------------------------------------------------------------------ |
/// | `message` | The single-line message, also returned by `ErrorKind::message`.                |
/// | `labels`  | An iterable of label texts, one for each span of the error, in order.          |
/// | `help`    | Optional help text describing what the user can do to fix the error.           |
///
/// Each tag accepts an expression. For structs with named fields, the expression is evaluated
/// with the fields of the struct in scope. Tuple structs are not supported.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    parse_macro_input!(item as ErrorKindTarget)
        .into_token_stream()
        .into()
}
