use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, FnArg, ItemFn, PatType, Type};

fn unsupported_arg_error(arg: &PatType, fn_name: &str) -> TokenStream2 {
    syn::Error::new_spanned(
        &arg.ty,
        format!("calc_fn arguments must be f64 (in {})", fn_name),
    )
    .to_compile_error()
}

/// Turns `fn name(a: f64, b: f64) -> R` into `pub fn name(args: &FunctionArgs) -> R`.
///
/// The generated function checks the call arity before binding each positional
/// argument. `FunctionArgs` must be in scope where the attribute is used.
#[proc_macro_attribute]
pub fn calc_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let fn_attrs = &input.attrs;
    let fn_name = &input.sig.ident;
    let fn_args = &input.sig.inputs;
    let fn_body = &input.block;
    let fn_output = &input.sig.output;
    let fn_name_str = fn_name.to_string();

    let mut arg_extractions = Vec::new();

    for (i, arg) in fn_args.iter().enumerate() {
        let FnArg::Typed(pat_type) = arg else {
            return syn::Error::new_spanned(arg, "calc_fn cannot take self")
                .to_compile_error()
                .into();
        };

        let arg_name = match *pat_type.pat {
            syn::Pat::Ident(ref ident) => &ident.ident,
            _ => {
                return syn::Error::new_spanned(&pat_type.pat, "Unsupported pattern")
                    .to_compile_error()
                    .into()
            }
        };

        let is_f64 = match *pat_type.ty {
            Type::Path(ref type_path) => type_path.path.is_ident("f64"),
            _ => false,
        };
        if !is_f64 {
            return unsupported_arg_error(pat_type, &fn_name_str).into();
        }

        arg_extractions.push(quote! {
            let #arg_name: f64 = args.get_number(#i)?;
        });
    }

    let args_len = arg_extractions.len();
    let expanded = quote! {
        #(#fn_attrs)*
        pub fn #fn_name(args: &FunctionArgs) #fn_output {
            args.expect_arity(#fn_name_str, #args_len)?;

            #(#arg_extractions)*

            #fn_body
        }
    };

    TokenStream::from(expanded)
}
