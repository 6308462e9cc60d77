use super::utils::{or_dash, parse_enum};
use anyhow::Result;
use clap::Subcommand;
use surplus_application::SurplusApp;
use surplus_core::donation::{DonationFilters, DonationStatus};
use surplus_core::request::{NewFoodRequest, RequestFilters};

#[derive(Subcommand)]
pub enum DonationAction {
    /// List donations
    List {
        #[arg(long, value_parser = parse_enum::<DonationStatus>)]
        status: Option<DonationStatus>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Show a single donation
    Show { id: String },
}

#[derive(Subcommand)]
pub enum RequestAction {
    /// Requests waiting for a decision
    Pending {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Request a listed donation
    Create {
        #[arg(long)]
        donation: String,
        #[arg(long)]
        quantity: u32,
        #[arg(long)]
        purpose: String,
    },
    /// Accept a pending request
    Accept { id: String },
}

pub async fn donations(app: &SurplusApp, action: DonationAction) -> Result<()> {
    let service = app.marketplace();
    match action {
        DonationAction::List {
            status,
            page,
            limit,
        } => {
            let filters = DonationFilters {
                status,
                page,
                limit,
            };
            let listing = service.donations(&filters).await?;
            if listing.is_empty() {
                println!("No donations found.");
                return Ok(());
            }
            println!(
                "Page {}/{} ({} total)",
                listing.page,
                listing.total_pages.max(1),
                listing.total
            );
            for donation in &listing.items {
                println!(
                    "  [{}] {} - {} (expires {})",
                    donation.id,
                    donation.food_item,
                    donation.status,
                    or_dash(donation.expiry_date.as_deref())
                );
            }
        }
        DonationAction::Show { id } => {
            let donation = service.donation(&id).await?;
            println!("{} [{}]", donation.food_item, donation.id);
            println!("  status:      {}", donation.status);
            if let Some(quantity) = donation.quantity {
                println!("  quantity:    {quantity}");
            }
            println!("  expires:     {}", or_dash(donation.expiry_date.as_deref()));
            println!("  description: {}", or_dash(donation.description.as_deref()));
            println!("  image:       {}", or_dash(donation.donation_image.as_deref()));
        }
    }
    Ok(())
}

pub async fn requests(app: &SurplusApp, action: RequestAction) -> Result<()> {
    let service = app.marketplace();
    match action {
        RequestAction::Pending { page, limit } => {
            let filters = RequestFilters {
                page,
                limit,
                ..RequestFilters::default()
            };
            let listing = service.pending_requests(&filters).await?;
            if listing.is_empty() {
                println!("No pending requests.");
                return Ok(());
            }
            for request in &listing.items {
                println!(
                    "  [{}] donation {} - {} x{} {}",
                    request.id,
                    request.donation_id,
                    request.status,
                    request.quantity_requested.unwrap_or_default(),
                    or_dash(request.purpose.as_deref())
                );
            }
        }
        RequestAction::Create {
            donation,
            quantity,
            purpose,
        } => {
            let request = NewFoodRequest {
                donation_id: donation,
                quantity_requested: quantity,
                purpose,
            };
            let envelope = service.request(&request).await?;
            println!("{}", envelope.message);
        }
        RequestAction::Accept { id } => {
            let envelope = service.accept(&id).await?;
            println!("{}", envelope.message);
        }
    }
    Ok(())
}
