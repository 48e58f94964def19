use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    MetaNameValue,
    Result,
    Token,
};

/// The tags of the `error` attribute.
#[derive(Debug)]
pub struct ErrorArgs {
    pub message: Expr,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl ErrorArgs {
    /// Reads the tags from the `error` attribute of the error kind `name`.
    fn from_attributes(name: &Ident, attributes: &[Attribute]) -> Result<Self> {
        let attr = attributes.iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new(name.span(), "`ErrorKind` requires an `error` attribute"))?;
        let tags = attr.parse_args_with(Punctuated::<MetaNameValue, Token![,]>::parse_terminated)?;

        let (mut message, mut labels, mut help) = (None, None, None);
        for tag in tags {
            let slot = if tag.path.is_ident("message") {
                &mut message
            } else if tag.path.is_ident("labels") {
                &mut labels
            } else if tag.path.is_ident("help") {
                &mut help
            } else {
                return Err(syn::Error::new_spanned(
                    tag.path,
                    "unknown tag, expected `message`, `labels`, or `help`",
                ));
            };

            if slot.replace(tag.value).is_some() {
                return Err(syn::Error::new_spanned(&tag.path, "duplicate tag"));
            }
        }

        let message = message.ok_or_else(|| syn::Error::new(
            name.span(),
            "`ErrorKind` requires a `message` tag in the `error` attribute",
        ))?;
        Ok(Self { message, labels, help })
    }
}

/// The struct to derive `ErrorKind` for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,

    /// The named fields of the struct, brought into scope for the tag expressions.
    pub field_names: Vec<Ident>,

    pub args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<ItemStruct>()?;
        let field_names = match &item.fields {
            Fields::Named(fields) => fields.named.iter()
                .filter_map(|field| field.ident.clone())
                .collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => return Err(syn::Error::new_spanned(
                &item.fields,
                "`ErrorKind` cannot be derived for tuple structs",
            )),
        };
        let args = ErrorArgs::from_attributes(&item.ident, &item.attrs)?;

        Ok(Self {
            name: item.ident,
            field_names,
            args,
        })
    }
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let Self { name, field_names, args } = self;
        let destructure = (!field_names.is_empty()).then(|| quote! {
            #[allow(unused_variables)]
            let #name { #(#field_names),* } = self;
        });
        let message = &args.message;
        let labels = args.labels
            .as_ref()
            .map_or_else(|| quote! { Vec::<String>::new() }, |labels| labels.to_token_stream());
        let help = args.help.as_ref().map(|help| quote! { builder.set_help(#help); });

        tokens.extend(quote! {
            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[std::ops::Range<usize>],
            ) -> ariadne::Report<(&'a str, std::ops::Range<usize>)> {
                #destructure

                let offset = spans.first().map_or(0, |span| span.start);
                let mut builder = ariadne::Report::build(ariadne::ReportKind::Error, src_id, offset)
                    .with_message(#message);

                // one label per span; extra labels or spans are ignored
                for (text, span) in #labels.into_iter().zip(spans) {
                    let label = ariadne::Label::new((src_id, span.clone()))
                        .with_color(difflib_error::EXPR);
                    let text = text.to_string();
                    builder.add_label(if text.is_empty() { label } else { label.with_message(text) });
                }

                #help
                builder.finish()
            }
        });
    }
}
