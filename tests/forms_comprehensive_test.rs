//! Comprehensive Forms Integration Tests
//!
//! This test suite exercises every field type through a complete form
//! definition: construction, rendering, localization lookup, file output
//! and definition validation.

use formapi::{
    CheckField, DateField, Field, FieldType, Form, FormError, FormField, HiddenField, Layout,
    Method, RadioField, SelectField, SubmitField, TextAreaField, TextField,
};
use pretty_assertions::assert_eq;

/// Test 1: Basic text field creation and properties
#[test]
fn test_text_field_creation() {
    let field = TextField::new("username")
        .with_label("u1")
        .with_default_value("guest")
        .with_length(30)
        .with_max_length(64);

    assert_eq!(field.name, "username");
    assert_eq!(field.label, "u1");
    assert_eq!(field.default_value, "guest");
    assert_eq!(field.length, 30);
    assert_eq!(field.max_length, 64);
    assert_eq!(field.field_type(), FieldType::Text);
}

/// Test 2: Complete end-to-end render of a one-field vertical form
#[test]
fn test_email_form_end_to_end() {
    let mut form = Form::new("f1");
    form.set_target("submit.php");
    form.add_message("10", "en", "Email");
    form.add_field(TextField::new("email").with_label("10"));

    let html = form.generate("en", false);

    assert_eq!(
        html,
        "<form id=\"f1\" class=\"formc\" action=\"submit.php\" method=\"post\" enctype=\"multipart/form-data\">\
         <p class=\"titlec\"></p>\
         <table class=\"formtable\">\
         <tr><td class=\"labelc\">Email</td>\
         <td class=\"formfield\"><input type=\"text\" class=\"textc\" maxlength=\"50\" size=\"20\" value=\"\" name=\"email\" /></td></tr>\
         </table></form>"
    );
}

/// Test 3: Password rendering of a text field
#[test]
fn test_password_text_field() {
    let mut form = Form::new("f1");
    form.add_field(TextField::new("secret").with_password(true));

    let html = form.generate("en", false);
    assert!(html.contains("<input type=\"password\" class=\"textc\""));
    assert!(html.contains("name=\"secret\""));
}

/// Test 4: Checkbox group renders array-style names and index values
#[test]
fn test_check_field_array_submission() {
    let mut form = Form::new("f1");
    form.add_message("c0", "en", "Red");
    form.add_message("c1", "en", "Green");
    form.add_message("c2", "en", "Blue");
    form.add_field(
        CheckField::new("colors")
            .with_label("lab")
            .with_options(vec!["c0".into(), "c1".into(), "c2".into()]),
    );

    let html = form.generate("en", false);

    assert!(html.contains("name=\"colors[]\" value=\"0\" />Red"));
    assert!(html.contains("name=\"colors[]\" value=\"1\" />Green"));
    assert!(html.contains("name=\"colors[]\" value=\"2\" />Blue"));
}

/// Test 5: Checkbox rows wrap after `length` options
#[test]
fn test_check_field_row_wrapping() {
    let options: Vec<String> = (0..6).map(|i| format!("o{}", i)).collect();
    let field = CheckField::new("c").with_options(options.clone()).with_length(3);
    let form_grid = {
        let mut form = Form::new("f1");
        form.add_field(field);
        form.generate("en", false)
    };

    // 6 options in rows of 3: exactly one break between two grid rows
    assert_eq!(form_grid.matches("</tr><tr><td>").count(), 1);
    assert!(form_grid.contains("value=\"2\" />o2</td></tr><tr><td>"));

    let single_row = CheckField::new("c").with_options(options).with_length(0);
    let html = single_row.render_control(&formapi::Messages::new(), "en");
    assert_eq!(html.matches("</tr><tr>").count(), 0);
    assert_eq!(html.matches("<td>").count(), 6);
}

/// Test 6: Out-of-range option lookup returns the "?" sentinel
#[test]
fn test_check_field_option_sentinel() {
    let field = CheckField::new("c").add_option("first").add_option("second");

    assert_eq!(field.option(0), "first");
    assert_eq!(field.option(1), "second");
    assert_eq!(field.option(2), "?");
    assert_eq!(field.option(usize::MAX), "?");
}

/// Test 7: Radio group renders a single selection with plain names
#[test]
fn test_radio_field_selection() {
    let mut form = Form::new("f1");
    form.add_message("s0", "en", "Small");
    form.add_message("s1", "en", "Large");
    form.add_field(
        RadioField::new("size")
            .add_option("s0")
            .add_option("s1")
            .with_selected(1),
    );

    let html = form.generate("en", false);

    assert!(html.contains("type=\"radio\" name=\"size\" value=\"0\" />Small"));
    assert!(html.contains("value=\"1\" checked=\"checked\" />Large"));
    assert!(!html.contains("size[]"));
}

/// Test 8: Selection list renders dropdown and multi-select variants
#[test]
fn test_select_field_variants() {
    let mut form = Form::new("f1");
    form.add_message("hu", "en", "Hungary");
    form.add_message("at", "en", "Austria");
    form.add_field(
        SelectField::new("country")
            .add_option("hu")
            .add_option("at")
            .with_selected(vec![0]),
    );
    form.add_field(
        SelectField::new("tags")
            .add_option("hu")
            .with_multiple(true)
            .with_size(3),
    );

    let html = form.generate("en", false);

    assert!(html.contains(
        "<select name=\"country\"><option value=\"0\" selected=\"selected\">Hungary</option>"
    ));
    assert!(html.contains("<select name=\"tags[]\" multiple=\"multiple\" size=\"3\">"));
}

/// Test 9: Date field renders ISO dates for default and bounds
#[test]
fn test_date_field_render() {
    let mut form = Form::new("f1");
    form.add_field(
        DateField::new("birthday")
            .with_default_value(DateField::parse_date("1990-06-15").unwrap())
            .with_min(DateField::parse_date("1900-01-01").unwrap()),
    );

    let html = form.generate("en", false);

    assert!(html.contains(
        "<input type=\"date\" class=\"textc\" value=\"1990-06-15\" min=\"1900-01-01\" name=\"birthday\" />"
    ));
}

/// Test 10: Date parsing rejects malformed input
#[test]
fn test_date_parse_error() {
    assert!(matches!(
        DateField::parse_date("15/06/1990"),
        Err(FormError::InvalidDate(_))
    ));
}

/// Test 11: Text area renders its default as element content
#[test]
fn test_text_area_render() {
    let mut form = Form::new("f1");
    form.add_field(
        TextAreaField::new("bio")
            .with_rows(6)
            .with_cols(50)
            .with_default_value("Hello & welcome"),
    );

    let html = form.generate("en", false);

    assert!(html.contains(
        "<textarea class=\"textc\" rows=\"6\" cols=\"50\" name=\"bio\">Hello &amp; welcome</textarea>"
    ));
}

/// Test 12: Hidden field renders its value and an empty label cell
#[test]
fn test_hidden_field_render() {
    let mut form = Form::new("f1");
    form.add_field(HiddenField::new("token").with_value("abc123"));

    let html = form.generate("en", false);

    assert!(html.contains("<td class=\"labelc\"></td>"));
    assert!(html.contains("<input type=\"hidden\" value=\"abc123\" name=\"token\" />"));
}

/// Test 13: Submit button caption comes from the localized label
#[test]
fn test_submit_field_caption() {
    let mut form = Form::new("f1");
    form.add_message("send", "en", "Send message");
    form.add_field(SubmitField::new("go").with_label("send"));

    let html = form.generate("en", false);

    assert!(html.contains("<input type=\"submit\" value=\"Send message\" name=\"go\" />"));
    assert!(html.contains("<td class=\"labelc\"></td>"));
}

/// Test 14: A form holding every field type renders every control
#[test]
fn test_mixed_form_renders_all_field_types() {
    let mut form = Form::new("everything");
    form.add_field(TextField::new("text"));
    form.add_field(CheckField::new("check").add_option("o"));
    form.add_field(RadioField::new("radio").add_option("o"));
    form.add_field(SelectField::new("select").add_option("o"));
    form.add_field(DateField::new("date"));
    form.add_field(TextAreaField::new("area"));
    form.add_field(HiddenField::new("hidden"));
    form.add_field(SubmitField::new("submit"));

    let html = form.generate("en", false);

    assert!(html.contains("type=\"text\""));
    assert!(html.contains("type=\"checkbox\""));
    assert!(html.contains("type=\"radio\""));
    assert!(html.contains("<select name=\"select\">"));
    assert!(html.contains("type=\"date\""));
    assert!(html.contains("<textarea"));
    assert!(html.contains("type=\"hidden\""));
    assert!(html.contains("type=\"submit\""));
    // One table row per field in vertical layout
    assert_eq!(html.matches("<tr><td class=\"labelc\">").count(), 8);
}

/// Test 15: Field lookup by name across variants
#[test]
fn test_find_field_across_types() {
    let mut form = Form::new("f1");
    form.add_field(TextField::new("email"));
    form.add_field(CheckField::new("colors"));
    form.add_field(SubmitField::new("go"));

    let found = form.find_field("colors").unwrap();
    assert_eq!(found.field_type(), FieldType::Check);
    assert_eq!(found.name(), "colors");
    assert!(form.find_field("nope").is_none());
}

/// Test 16: Validation rejects colliding submission keys and missing targets
#[test]
fn test_validate_definition() {
    let mut form = Form::new("f1");
    form.add_field(TextField::new("email"));
    form.add_field(CheckField::new("email"));

    // No target yet
    assert!(matches!(form.validate(), Err(FormError::EmptyTarget)));

    form.set_target("submit.php");
    match form.validate() {
        Err(FormError::DuplicateField(name)) => assert_eq!(name, "email"),
        other => panic!("expected duplicate field error, got {:?}", other),
    }

    form.fields_mut().pop();
    assert!(form.validate().is_ok());
}

/// Test 17: Saving a full document writes valid HTML to disk
#[test]
fn test_save_full_document() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("contact.html");

    let mut form = Form::new("contact");
    form.set_title("t");
    form.add_message("t", "en", "Contact");
    form.add_field(TextField::new("email"));
    form.save(&path, "en", true).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("<!DOCTYPE html>"));
    assert!(written.contains("<title>Contact</title>"));
    assert!(written.ends_with("</body></html>"));
}

/// Test 18: Writing to an in-memory buffer matches generate()
#[test]
fn test_write_to_buffer() {
    let mut form = Form::new("f1");
    form.add_field(TextField::new("email"));

    let mut buffer = Vec::new();
    form.write(&mut buffer, "en", false).unwrap();

    assert_eq!(String::from_utf8(buffer).unwrap(), form.generate("en", false));
}

/// Test 19: Method and layout accessors reflect configuration
#[test]
fn test_method_and_layout_configuration() {
    let mut form = Form::new("f1");
    assert_eq!(form.method(), Method::Post);
    assert_eq!(form.layout(), Layout::Vertical);

    form.set_method(Method::Get);
    form.set_layout(Layout::Horizontal);

    assert_eq!(form.method(), Method::Get);
    assert_eq!(form.layout(), Layout::Horizontal);
    assert!(form.generate("en", false).contains("method=\"get\""));
}

/// Test 20: Field list replacement and mutable access
#[test]
fn test_set_fields_and_mutation() {
    let mut form = Form::new("f1");
    form.set_fields(vec![
        FormField::Text(TextField::new("a")),
        FormField::Text(TextField::new("b")),
    ]);
    assert_eq!(form.fields().len(), 2);

    form.fields_mut().pop();
    assert_eq!(form.fields().len(), 1);
    assert_eq!(form.fields()[0].name(), "a");
}
