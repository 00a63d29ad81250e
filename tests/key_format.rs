use filter_name_parser::{KeyFormat, ODataKeyFormat, Verbatim};

#[test]
fn test_odata_dotted_paths() {
    assert_eq!(ODataKeyFormat.format_key("city.name"), "CityName");
    assert_eq!(ODataKeyFormat.format_key("owner.address.city"), "OwnerAddressCity");
}

#[test]
fn test_odata_single_segment() {
    assert_eq!(ODataKeyFormat.format_key("age"), "Age");
    assert_eq!(ODataKeyFormat.format_key("Email"), "Email");
    assert_eq!(ODataKeyFormat.format_key("created_at"), "Created_at");
    assert_eq!(ODataKeyFormat.format_key("firstName"), "FirstName");
}

#[test]
fn test_odata_empty_input() {
    assert_eq!(ODataKeyFormat.format_key(""), "");
    assert_eq!(ODataKeyFormat.format_key("."), "");
    assert_eq!(ODataKeyFormat.format_key("a..b"), "AB");
}

#[test]
fn test_odata_non_ascii() {
    assert_eq!(ODataKeyFormat.format_key("ville.éta"), "VilleÉta");
    assert_eq!(ODataKeyFormat.format_key("straße"), "Straße");
}

#[test]
fn test_verbatim() {
    assert_eq!(Verbatim.format_key("city.name"), "city.name");
    assert_eq!(Verbatim.format_key(""), "");
}

#[test]
fn test_closure_key_format() {
    let slashes = |raw: &str| raw.replace('.', "/");
    assert_eq!(slashes.format_key("city.name"), "city/name");
}
