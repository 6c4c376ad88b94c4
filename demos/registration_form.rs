//! Complete registration form demo
//!
//! This example builds a registration form using every field type and
//! writes it out as a standalone HTML page.

use formapi::{
    CheckField, DateField, Form, HiddenField, Result, SelectField, SubmitField, TextAreaField,
    TextField,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("📋 Creating registration form demo...");

    let mut form = Form::new("registration");
    form.set_name("registration");
    form.set_target("register.php");
    form.set_title("title");

    // 1. Messages
    form.add_message("title", "en", "Create your account");
    form.add_message("name", "en", "Full name");
    form.add_message("email", "en", "Email address");
    form.add_message("email.help", "en", "We never share your address");
    form.add_message("password", "en", "Password");
    form.add_message("birthday", "en", "Date of birth");
    form.add_message("country", "en", "Country");
    form.add_message("country.hu", "en", "Hungary");
    form.add_message("country.at", "en", "Austria");
    form.add_message("country.sk", "en", "Slovakia");
    form.add_message("topics", "en", "Topics you care about");
    form.add_message("topics.rust", "en", "Rust");
    form.add_message("topics.web", "en", "Web");
    form.add_message("topics.cli", "en", "Command line tools");
    form.add_message("topics.db", "en", "Databases");
    form.add_message("about", "en", "About you");
    form.add_message("send", "en", "Register");

    // 2. Text inputs
    form.add_field(TextField::new("name").with_label("name").with_length(30));
    form.add_field(
        TextField::new("email")
            .with_label("email")
            .with_help("email.help")
            .with_max_length(120),
    );
    form.add_field(
        TextField::new("password")
            .with_label("password")
            .with_password(true),
    );

    // 3. Date of birth with a sane range
    form.add_field(
        DateField::new("birthday")
            .with_label("birthday")
            .with_min(DateField::parse_date("1900-01-01")?)
            .with_max(DateField::parse_date("2026-12-31")?),
    );

    // 4. Country dropdown
    form.add_field(
        SelectField::new("country")
            .with_label("country")
            .add_option("country.hu")
            .add_option("country.at")
            .add_option("country.sk"),
    );

    // 5. Topic checkboxes, two per row
    form.add_field(
        CheckField::new("topics")
            .with_label("topics")
            .add_option("topics.rust")
            .add_option("topics.web")
            .add_option("topics.cli")
            .add_option("topics.db")
            .with_checked(vec![0])
            .with_length(2),
    );

    // 6. Free-form text, hidden referrer and the submit button
    form.add_field(TextAreaField::new("about").with_label("about").with_rows(5));
    form.add_field(HiddenField::new("referrer").with_value("demo"));
    form.add_field(SubmitField::new("send").with_label("send"));

    form.validate()?;
    form.save("registration_form.html", "en", true)?;

    println!("✅ Created registration_form.html");
    println!("   {} fields, vertical layout", form.fields().len());

    Ok(())
}
