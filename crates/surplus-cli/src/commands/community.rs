use anyhow::Result;
use clap::Subcommand;
use surplus_application::SurplusApp;
use surplus_core::community::{Feedback, LeaderboardPeriod, Referral};

#[derive(Subcommand)]
pub enum ReferAction {
    /// Invite a friend
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        message: String,
    },
    /// People you have invited
    List,
}

pub async fn leaderboard(app: &SurplusApp, monthly: bool, limit: u32) -> Result<()> {
    let period = if monthly {
        LeaderboardPeriod::Monthly
    } else {
        LeaderboardPeriod::AllTime
    };
    let entries = app.community().leaderboard(period, limit).await?;
    if entries.is_empty() {
        println!("No donors yet.");
        return Ok(());
    }
    for (rank, entry) in entries.iter().enumerate() {
        println!(
            "{:>3}. {} - {} donation(s)",
            rank + 1,
            entry.full_name,
            entry.donation_count
        );
    }
    Ok(())
}

pub async fn feedback(app: &SurplusApp, text: String, rating: Option<u8>) -> Result<()> {
    let feedback = Feedback {
        feedback_text: text,
        rating,
    };
    app.community().feedback(&feedback).await?;
    println!("Thanks for your feedback!");
    Ok(())
}

pub async fn refer(app: &SurplusApp, action: ReferAction) -> Result<()> {
    let service = app.community();
    match action {
        ReferAction::Create {
            email,
            name,
            message,
        } => {
            let referral = Referral {
                referred_email: email,
                referred_name: name,
                message,
            };
            let record = service.refer(&referral).await?;
            println!("Invitation sent to {}", record.referred_email);
        }
        ReferAction::List => {
            let referrals = service.referrals().await?;
            if referrals.is_empty() {
                println!("You have not referred anyone yet.");
            }
            for record in &referrals {
                println!(
                    "  {} {}",
                    record.referred_email,
                    record.referred_name.as_deref().unwrap_or_default()
                );
            }
        }
    }
    Ok(())
}
