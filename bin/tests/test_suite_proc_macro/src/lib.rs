use quote::{format_ident, quote};

/// One `#[test]` per `.js` fixture below `bin/tests`, each checked against its `.js.snap` file.
#[proc_macro]
pub fn generate_tests(_: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let root_dir = format!("{}/..", env!("CARGO_MANIFEST_DIR"));
    let tests = walkdir::WalkDir::new(root_dir.clone())
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .filter(|entry| entry.path().extension() == Some("js".as_ref()))
        .map(|entry| {
            let fixture_path = entry.path().to_string_lossy();
            let relative_path = entry.path().strip_prefix(&root_dir).unwrap().to_string_lossy();
            let test_ident = format_ident!(
                "test_{}",
                relative_path.replace(['/', '-'], "_").replace(".js", "")
            );
            quote! {
                #[test]
                fn #test_ident() {
                    snapshot_expect(#fixture_path);
                }
            }
        });

    quote! {
        #[ctor::ctor]
        fn init() {
            env_logger::init();
        }

        #(#tests)*
    }
    .into()
}
