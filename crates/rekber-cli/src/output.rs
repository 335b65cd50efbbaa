//! Output helpers shared by the subcommand handlers.

use serde_json::json;

use rekber_escrow::{Dispute, Escrow, EscrowStatus};

/// Pretty-print any serializable value as JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One-line summary of an escrow for list output.
pub fn escrow_line(escrow: &Escrow) -> String {
    let method = escrow
        .payment_method
        .map(|m| m.as_str())
        .unwrap_or("-");
    format!(
        "{}  {}  {}  {}  {}",
        escrow.id,
        escrow.seller,
        escrow.amount,
        escrow.status,
        method
    )
}

/// Multi-line detail view of an escrow.
pub fn print_escrow(escrow: &Escrow) {
    println!("Escrow    {}", escrow.id);
    match &escrow.buyer {
        Some(buyer) => println!("Buyer     {buyer}"),
        None => println!("Buyer     -"),
    }
    println!("Seller    {}", escrow.seller);
    println!("Amount    {}", escrow.amount);
    println!("Status    {}", escrow.status);
    if let Some(method) = escrow.payment_method {
        println!("Method    {method}");
    }
    println!("Created   {}", escrow.created_at.to_rfc3339());
    println!("Timeline  {}", timeline(escrow.status));
}

/// The happy-path timeline with the current status marked, e.g.
/// `pending_payment > funded > [shipped] > delivered > released`.
pub fn timeline(current: EscrowStatus) -> String {
    let steps = [
        EscrowStatus::PendingPayment,
        EscrowStatus::Funded,
        EscrowStatus::Shipped,
        EscrowStatus::Delivered,
        EscrowStatus::Released,
    ];
    let rendered: Vec<String> = steps
        .iter()
        .map(|step| {
            if *step == current {
                format!("[{step}]")
            } else {
                step.to_string()
            }
        })
        .collect();
    let mut line = rendered.join(" > ");
    if current.happy_path_position().is_none() {
        line.push_str(&format!("  (currently: {current})"));
    }
    line
}

/// One-line summary of a dispute.
pub fn dispute_line(dispute: &Dispute) -> String {
    format!(
        "{}  escrow={}  {}  {}",
        dispute.id, dispute.escrow_id, dispute.status, dispute.reason
    )
}

/// Report the authoritative status after a mutating call's re-fetch.
pub fn print_status_change(escrow: &Escrow) {
    println!("{} is now {}", escrow.id, escrow.status);
}

/// JSON shape for a status-change report.
pub fn status_change_json(escrow: &Escrow) -> serde_json::Value {
    json!({
        "id": escrow.id,
        "status": escrow.status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rekber_core::{EscrowId, PaymentMethod, Rupiah, UserId};

    fn sample(status: EscrowStatus) -> Escrow {
        Escrow {
            id: EscrowId::new("ESC-1030").unwrap(),
            buyer: None,
            seller: UserId::new("toko-andalas").unwrap(),
            amount: Rupiah::new(1_250_000).unwrap(),
            status,
            payment_method: Some(PaymentMethod::Qris),
            created_at: "2026-03-01T08:30:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn escrow_line_contains_key_fields() {
        let line = escrow_line(&sample(EscrowStatus::Funded));
        assert!(line.contains("ESC-1030"));
        assert!(line.contains("Rp1.250.000"));
        assert!(line.contains("funded"));
        assert!(line.contains("QRIS"));
    }

    #[test]
    fn timeline_marks_current_happy_path_step() {
        let line = timeline(EscrowStatus::Shipped);
        assert!(line.contains("[shipped]"));
        assert!(!line.contains("[funded]"));
    }

    #[test]
    fn timeline_annotates_dispute_branch() {
        let line = timeline(EscrowStatus::Disputed);
        assert!(line.contains("currently: disputed"));
        assert!(!line.contains("[pending_payment]"));
    }

    #[test]
    fn status_change_json_shape() {
        let value = status_change_json(&sample(EscrowStatus::Released));
        assert_eq!(value["id"], "ESC-1030");
        assert_eq!(value["status"], "released");
    }
}
