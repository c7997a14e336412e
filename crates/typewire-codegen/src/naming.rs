//! Naming policy for generated items.
//!
//! Service names arrive in PascalCase from the schema; everything else the
//! generator emits is derived here so the rules live in one place.
//!
//! # Examples
//!
//! ```
//! use typewire_codegen::naming;
//!
//! assert_eq!(naming::to_snake_case("ProductService"), "product_service");
//! assert_eq!(naming::raw_type_name("ProductService"), "ProductServiceRaw");
//! assert_eq!(naming::client_type_name("Shop"), "ShopClient");
//! ```

/// Converts a PascalCase or camelCase identifier to snake_case.
///
/// Acronym runs collapse into a single word, so `HTTPService` becomes
/// `http_service` rather than `h_t_t_p_service`.
///
/// # Examples
///
/// ```
/// use typewire_codegen::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("AuthorisationService"), "authorisation_service");
/// assert_eq!(to_snake_case("HTTPService"), "http_service");
/// assert_eq!(to_snake_case("signIn"), "sign_in");
/// assert_eq!(to_snake_case("already_snake"), "already_snake");
/// ```
#[must_use]
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);

    for (index, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_uppercase() {
            let after_word = index > 0
                && (chars[index - 1].is_ascii_lowercase() || chars[index - 1].is_ascii_digit());
            let before_word = index > 0
                && chars[index - 1].is_ascii_uppercase()
                && chars.get(index + 1).is_some_and(char::is_ascii_lowercase);
            if after_word || before_word {
                result.push('_');
            }
            result.push(ch.to_ascii_lowercase());
        } else {
            result.push(ch);
        }
    }

    result
}

/// Name of the internal calling type emitted for a service.
///
/// # Examples
///
/// ```
/// use typewire_codegen::naming::raw_type_name;
///
/// assert_eq!(raw_type_name("AuthorisationService"), "AuthorisationServiceRaw");
/// ```
#[must_use]
pub fn raw_type_name(service: &str) -> String {
    format!("{service}Raw")
}

/// Name of the client facade struct emitted for an API.
///
/// # Examples
///
/// ```
/// use typewire_codegen::naming::client_type_name;
///
/// assert_eq!(client_type_name("Shop"), "ShopClient");
/// assert_eq!(client_type_name("Api"), "ApiClient");
/// ```
#[must_use]
pub fn client_type_name(api: &str) -> String {
    format!("{api}Client")
}
