use super::utils::{or_dash, parse_enum, read_image};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use surplus_application::SurplusApp;
use surplus_core::account::{Credentials, ProfileUpdate, RegistrationForm};
use surplus_core::session::Role;

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    address: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm_password: String,
    /// consumer, donor or ngo
    #[arg(long, value_parser = parse_enum::<Role>)]
    role: Role,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show your profile
    Show,
    /// Change name, phone or address
    Update {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        address: Option<String>,
    },
    /// Upload a profile picture (png, jpg, jpeg or gif)
    Picture { path: PathBuf },
}

pub async fn register(app: &SurplusApp, args: RegisterArgs) -> Result<()> {
    let form = RegistrationForm {
        name: args.name,
        email: args.email,
        phone: args.phone,
        address: args.address,
        password: args.password,
        confirm_password: args.confirm_password,
        role: args.role,
    };
    let envelope = app.auth().register(&form).await?;
    println!("{}", envelope.message);
    if app.session().is_authenticated() {
        println!("Signed in as {}", form.email.trim());
    } else {
        println!("Run `surplus login` to continue.");
    }
    Ok(())
}

pub async fn login(app: &SurplusApp, email: String, password: String) -> Result<()> {
    let outcome = app.auth().login(&Credentials::new(email, password)).await?;
    match &outcome.full_name {
        Some(name) => println!("Welcome back, {name}!"),
        None => println!("{}", outcome.message),
    }
    println!(
        "Role: {}  (next: {})",
        outcome.session.role,
        outcome.landing_path()
    );
    Ok(())
}

pub fn logout(app: &SurplusApp) -> Result<()> {
    app.auth().logout()?;
    println!("Logged out.");
    Ok(())
}

pub fn whoami(app: &SurplusApp) -> Result<()> {
    match app.auth().current()? {
        Some(session) => println!("user {} ({})", session.user_id, session.role),
        None => println!("Not logged in."),
    }
    Ok(())
}

pub async fn profile(app: &SurplusApp, action: ProfileAction) -> Result<()> {
    let service = app.profile();
    let profile = match action {
        ProfileAction::Show => service.get().await?,
        ProfileAction::Update {
            name,
            phone,
            address,
        } => {
            let update =
                ProfileUpdate::from_form(name.as_deref(), phone.as_deref(), address.as_deref());
            service.update(&update).await?
        }
        ProfileAction::Picture { path } => {
            let image = read_image(&path)?;
            service.upload_picture(&image).await?
        }
    };

    println!("{} <{}>", profile.full_name, profile.email);
    println!("  role:    {}", profile.role);
    println!("  phone:   {}", or_dash(profile.phone_number.as_deref()));
    println!("  address: {}", or_dash(profile.address.as_deref()));
    println!("  picture: {}", or_dash(profile.profile_picture.as_deref()));
    Ok(())
}
