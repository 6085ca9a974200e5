use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// The tags accepted by the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            let slot = match ident.to_string().as_str() {
                "message" => &mut args.message,
                "labels" => &mut args.labels,
                "help" => &mut args.help,
                other => return Err(syn::Error::new_spanned(&ident, format!("unknown tag `{}`", other))),
            };
            if slot.is_some() {
                return Err(syn::Error::new_spanned(&ident, format!("duplicate tag `{}`", ident)));
            }
            *slot = Some(input.parse()?);

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// The struct to derive `ErrorKind` for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<ItemStruct>()?;
        let args = find_error_attr(&item.attrs)
            .map(|attr| attr.parse_args::<ErrorArgs>())
            .transpose()?
            .unwrap_or_default();

        if args.message.is_none() {
            return Err(syn::Error::new_spanned(&item.ident, "missing `message` tag in `#[error(...)]`"));
        }

        Ok(Self { name: item.ident, fields: item.fields, args })
    }
}

fn find_error_attr(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident("error"))
}

/// Brings the named fields of `self` into scope, or emits a compile error for tuple structs.
fn destructure_fields(ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().map(|field| &field.ident);
            quote! {
                #[allow(unused_variables)]
                let #ident { #(#names),* } = self;
            }
        },
        Fields::Unnamed(_) => quote_spanned! { ident.span() =>
            compile_error!("`ErrorKind` cannot be derived for tuple structs");
        },
        Fields::Unit => quote! {},
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let name = &self.name;
        let destructure = destructure_fields(name, &self.fields);
        let message = &self.args.message;
        let labels = self.args.labels
            .as_ref()
            .map(|labels| quote! { #labels })
            .unwrap_or_else(|| quote! { [""] });
        let help = self.args.help
            .as_ref()
            .map(|help| quote! { builder.set_help(#help); });

        tokens.extend(quote! {
            impl symcalc_error::ErrorKind for #name {
                fn message(&self) -> String {
                    #destructure
                    (#message).to_string()
                }

                fn build_report<'a>(
                    &self,
                    src_id: &'a str,
                    spans: &[std::ops::Range<usize>],
                ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                    #destructure

                    let offset = spans.first().map_or(0, |span| span.start);
                    let labels = (#labels)
                        .into_iter()
                        .zip(spans.iter().cloned())
                        .map(|(label_str, span)| {
                            let mut label = ariadne::Label::new((src_id, span))
                                .with_color(symcalc_error::EXPR);

                            if !label_str.is_empty() {
                                label = label.with_message(label_str);
                            }

                            label
                        })
                        .collect::<Vec<_>>();

                    #[allow(unused_mut)]
                    let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                        .with_message(symcalc_error::ErrorKind::message(self))
                        .with_labels(labels);

                    #help
                    builder.finish()
                }
            }
        });
    }
}
