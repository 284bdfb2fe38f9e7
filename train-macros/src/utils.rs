//! 宏共享的小工具：derive 合并与字段注入。

use proc_macro2::Span;
use quote::ToTokens;
use syn::punctuated::Punctuated;
use syn::{Attribute, Field, FieldsNamed, Token, Type};

/// 将所需 derive 并入目标的属性列表：
/// - 已有的 `#[derive(...)]` 会被拆出，与所需列表去重合并；
/// - 合并结果置于属性列表最前，其余属性原样保留。
pub(crate) fn apply_derives(attrs: &mut Vec<Attribute>, required: Vec<syn::Path>) {
    let mut retained = Vec::new();
    let mut existing = Vec::new();
    for attr in attrs.drain(..) {
        if attr.path().is_ident("derive") {
            if let Ok(list) =
                attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
            {
                existing.extend(list);
            }
        } else {
            retained.push(attr);
        }
    }

    let mut seen = std::collections::HashSet::<String>::new();
    let mut merged: Vec<syn::Path> = Vec::new();
    for path in required.into_iter().chain(existing) {
        if seen.insert(derive_key(&path)) {
            merged.push(path);
        }
    }

    let derive_attr: Attribute = syn::parse_quote!(#[derive(#(#merged),*)]);
    attrs.push(derive_attr);
    attrs.extend(retained);
}

// 归一化 derive 的 key：serde 派生可能以裸名或带路径出现，按尾段判重，
// 避免 Serialize 与 serde::Serialize 重复。
fn derive_key(path: &syn::Path) -> String {
    match path.segments.last() {
        Some(last) => {
            let name = last.ident.to_string();
            match name.as_str() {
                "Serialize" | "Deserialize" => format!("serde::{name}"),
                _ => name,
            }
        }
        None => path.to_token_stream().to_string(),
    }
}

/// 为具名字段集合注入缺失的必备字段：
/// 新字段按给定顺序置于最前；已存在的字段保留原定义与原相对顺序。
pub(crate) fn prepend_missing_fields(fields: &mut FieldsNamed, required: &[(&str, &Type)]) {
    let existing = fields.named.clone();
    let mut rebuilt: Punctuated<Field, Token![,]> = Punctuated::new();

    for (name, ty) in required {
        let present = existing
            .iter()
            .any(|f| f.ident.as_ref().is_some_and(|i| i == *name));
        if !present {
            let ident = syn::Ident::new(name, Span::call_site());
            rebuilt.push(syn::parse_quote! { #ident: #ty });
        }
    }
    rebuilt.extend(existing);

    fields.named = rebuilt;
}
