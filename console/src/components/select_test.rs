use super::*;
use crate::net::types::CampaignStatus;

fn campaign(id: &str, name: &str) -> Campaign {
    Campaign {
        id: id.to_owned(),
        name: name.to_owned(),
        status: CampaignStatus::Draft,
        budget: 0.0,
        target_audience: None,
    }
}

#[test]
fn campaign_options_keep_order_and_labels() {
    let options = campaign_options(&[campaign("c1", "Autumn Launch"), campaign("c2", "Holiday Promo")]);
    assert_eq!(
        options,
        vec![SelectOption::new("c1", "Autumn Launch"), SelectOption::new("c2", "Holiday Promo")]
    );
}

#[test]
fn campaign_options_empty_list() {
    assert!(campaign_options(&[]).is_empty());
}
