// Public country directory. `/all` only answers when a field filter is given.
pub fn get_country_directory_url() -> &'static str {
    "https://restcountries.com/v3.1/all?fields=cca2,name"
}

pub const CONTACT_EMAIL: &str = "edenicid@gmail.com";

// Web-mail compose endpoint used for the contact form deep link.
pub const MAIL_COMPOSE_URL: &str = "https://mail.google.com/mail/?view=cm&fs=1";

pub const WHATSAPP_PRIMARY: &str = "6281293185162";
pub const WHATSAPP_SECONDARY: &str = "6285772274445";

pub const DESIGNER_CREDIT_URL: &str = "https://instagram.com/neilwebsite";

pub fn whatsapp_link(number: &str) -> String {
    format!("https://wa.me/{}", number)
}
