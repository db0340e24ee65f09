/// Shop buy/sell rules and pricing.
use treasure_hunter::hunt::{
    Difficulty, HuntError, Hunter, Item, PriceList, Shop, ShopMode,
};

#[test]
fn buy_with_short_purse_is_rejected() {
    let prices = PriceList {
        rope: 25,
        ..PriceList::default()
    };
    let shop = Shop::new(0.5, prices);
    let mut h = Hunter::new("ada", 5);
    let err = shop.enter(&mut h, ShopMode::Buy, "rope").unwrap_err();
    assert_eq!(
        err,
        HuntError::InsufficientFunds {
            item: Item::Rope,
            price: 25,
            available: 5
        }
    );
    assert_eq!(h.gold(), 5);
    assert!(!h.has_item(Item::Rope));
}

#[test]
fn sell_then_buy_never_profits() {
    for mode in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
        let shop = Shop::new(mode.settings().markdown, PriceList::default());
        for item in Item::ALL {
            for start in [0u32, 5, 20, 100] {
                let mut h = Hunter::new("ada", start);
                h.kit_mut().add_item(item);
                shop.enter(&mut h, ShopMode::Sell, item.name()).unwrap();
                assert!(!h.has_item(item));
                let after_sale = h.gold();
                assert_eq!(after_sale, start + shop.sell_price(item).unwrap());
                match shop.enter(&mut h, ShopMode::Buy, item.name()) {
                    Ok(_) => {
                        assert!(h.has_item(item));
                        assert!(
                            h.gold() <= start,
                            "{} mode, {}: {} -> {}",
                            mode,
                            item,
                            start,
                            h.gold()
                        );
                    }
                    Err(e) => {
                        assert!(matches!(e, HuntError::InsufficientFunds { .. }), "{:?}", e);
                        assert_eq!(h.gold(), after_sale);
                        assert!(!h.has_item(item));
                    }
                }
            }
        }
    }
}

#[test]
fn sell_unowned_item_fails_cleanly() {
    let shop = Shop::new(1.0, PriceList::default());
    let mut h = Hunter::new("ada", 9);
    assert_eq!(
        shop.enter(&mut h, ShopMode::Sell, "Machete"),
        Err(HuntError::ItemNotOwned(Item::Machete))
    );
    assert_eq!(h.gold(), 9);
}

#[test]
fn markdown_per_mode() {
    let prices = PriceList::default();
    let easy = Shop::new(Difficulty::Easy.settings().markdown, prices);
    let normal = Shop::new(Difficulty::Normal.settings().markdown, prices);
    let hard = Shop::new(Difficulty::Hard.settings().markdown, prices);
    assert_eq!(easy.sell_price(Item::Horse), Some(12));
    assert_eq!(normal.sell_price(Item::Horse), Some(6));
    assert_eq!(hard.sell_price(Item::Horse), Some(3));
}

#[test]
fn buy_then_sell_round_trip_in_normal_mode() {
    let shop = Shop::new(0.5, PriceList::default());
    let mut h = Hunter::new("ada", 20);
    let msg = shop.enter(&mut h, ShopMode::Buy, "BOAT").unwrap();
    assert_eq!(msg, "Ye' got yerself a boat. Come again soon.");
    assert_eq!(h.gold(), 0);
    assert_eq!(
        shop.enter(&mut h, ShopMode::Buy, "boat"),
        Err(HuntError::AlreadyOwned(Item::Boat))
    );
    shop.enter(&mut h, ShopMode::Sell, "boat").unwrap();
    assert_eq!(h.gold(), 10);
}
