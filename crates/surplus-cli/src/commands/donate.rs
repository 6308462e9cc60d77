use super::utils::{parse_enum, parse_time, read_image};
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clap::Args;
use std::path::PathBuf;
use surplus_application::{DonationWizard, SurplusApp, WizardStep};
use surplus_core::donation::{Category, ContactPreference, PickupDay, QuantityUnit};

#[derive(Args)]
pub struct DonateArgs {
    /// What you are giving away
    #[arg(long)]
    name: String,
    /// cooked, produce, bakery, canned or other
    #[arg(long, value_parser = parse_enum::<Category>)]
    category: Category,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long)]
    quantity: u32,
    /// servings, items, kg or lbs
    #[arg(long, value_parser = parse_enum::<QuantityUnit>, default_value = "servings")]
    unit: QuantityUnit,
    /// YYYY-MM-DD
    #[arg(long)]
    prepared: Option<NaiveDate>,
    /// Days until the food expires
    #[arg(long, default_value_t = 0)]
    expiry_days: u32,
    /// Extra hours until the food expires (0-23)
    #[arg(long, default_value_t = 0)]
    expiry_hours: u8,
    #[arg(long)]
    allergens: bool,
    /// Photo of the food
    #[arg(long)]
    image: Option<PathBuf>,

    #[arg(long)]
    pickup_address: String,
    /// HH:MM
    #[arg(long, value_parser = parse_time)]
    pickup_from: NaiveTime,
    /// HH:MM
    #[arg(long, value_parser = parse_time)]
    pickup_to: NaiveTime,
    /// Comma-separated, e.g. mon,wed,sat
    #[arg(long, value_delimiter = ',', value_parser = parse_enum::<PickupDay>)]
    days: Vec<PickupDay>,
    /// app, phone, sms or email
    #[arg(long, value_parser = parse_enum::<ContactPreference>, default_value = "app")]
    contact: ContactPreference,
    #[arg(long, default_value = "")]
    notes: String,
}

pub async fn run(app: &SurplusApp, args: DonateArgs) -> Result<()> {
    let mut wizard = app.wizard();

    if let Some(path) = &args.image {
        wizard.set_image(read_image(path)?)?;
    }
    wizard.edit(|draft| {
        draft.name = args.name;
        draft.category = Some(args.category);
        draft.description = args.description;
        draft.quantity.amount = args.quantity;
        draft.quantity.unit = args.unit;
        draft.prepared_date = args.prepared;
        draft.expiry.days = args.expiry_days;
        draft.expiry.hours = args.expiry_hours;
        draft.contains_allergens = args.allergens;
    })?;
    advance(&mut wizard)?;

    wizard.edit(|draft| {
        draft.pickup.address = args.pickup_address;
        draft.pickup.from_time = Some(args.pickup_from);
        draft.pickup.to_time = Some(args.pickup_to);
        draft.pickup.days = args.days.into_iter().collect();
        draft.pickup.contact_preference = args.contact;
        draft.pickup.notes = args.notes;
    })?;
    advance(&mut wizard)?;

    let draft = wizard.draft();
    println!(
        "Submitting {} x{} {} ({} day(s) {} hour(s) until expiry)",
        draft.name.trim(),
        draft.quantity.amount,
        draft.quantity.unit,
        draft.expiry.days,
        draft.expiry.hours
    );
    if let Some(preview) = wizard.preview() {
        println!("  image: {}", preview.as_str());
    }

    match wizard.submit(app.api(), app.session()).await {
        Ok(receipt) => {
            println!("{}", receipt.message);
            if let Some(donation) = &receipt.donation {
                println!("Listed as donation {}", donation.id);
            }
            Ok(())
        }
        Err(err) => {
            let message = wizard
                .last_error()
                .map(str::to_string)
                .unwrap_or_else(|| err.to_string());
            anyhow::bail!(message)
        }
    }
}

fn advance(wizard: &mut DonationWizard) -> Result<WizardStep> {
    let issues = wizard.issues();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("  {}: {}", issue.field, issue.message);
        }
        anyhow::bail!("{} field(s) need attention", issues.len());
    }
    Ok(wizard.next()?)
}
