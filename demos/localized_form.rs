//! Localization and fail-soft configuration demo
//!
//! This example renders one contact form in English and Hungarian, shows the
//! fallback-to-id behavior for a language with no translations, and triggers
//! the fail-soft setters so their warnings appear on stderr.

use formapi::{Form, Result, SubmitField, TextAreaField, TextField};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("📋 Creating localized contact form demo...");

    let mut form = Form::new("contact");
    form.set_target("contact.php");
    form.set_title("title");

    form.add_message("title", "en", "Contact us");
    form.add_message("title", "hu", "Írjon nekünk");
    form.add_message("name", "en", "Your name");
    form.add_message("name", "hu", "Az Ön neve");
    form.add_message("message", "en", "Message");
    form.add_message("message", "hu", "Üzenet");
    form.add_message("send", "en", "Send");
    form.add_message("send", "hu", "Küldés");

    form.add_field(TextField::new("name").with_label("name"));
    form.add_field(TextAreaField::new("message").with_label("message"));
    form.add_field(SubmitField::new("send").with_label("send"));

    // These are rejected: the method stays post and the target is kept
    form.set_method_str("push");
    form.set_target("   ");
    assert_eq!(form.target(), Some("contact.php"));

    form.validate()?;
    form.save("contact_en.html", "en", true)?;
    form.save("contact_hu.html", "hu", true)?;

    println!("✅ Created contact_en.html and contact_hu.html");

    // A language nobody translated: every message id shows verbatim
    let german = form.generate("de", false);
    println!(
        "   untranslated render falls back to ids: {}",
        german.contains("<td class=\"labelc\">name</td>")
    );

    Ok(())
}
