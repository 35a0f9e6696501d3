use gadget_catalog::{CatalogResult, Collection, ExtrasLimit, Item, ItemRef};

/// The demo purchase: one console, two televisions and a microwave
pub struct PurchaseFixture {
    pub purchases: Collection,
    pub console: ItemRef,
    pub television_1: ItemRef,
    pub television_2: ItemRef,
    pub microwave: ItemRef,
}

impl PurchaseFixture {
    pub fn build() -> CatalogResult<Self> {
        let mut wireless_controller = Item::controller();
        wireless_controller.set_max_extras(ExtrasLimit::AtMost(0));
        wireless_controller.set_price(2.49)?;
        let wireless_controller = wireless_controller.into_shared();

        let mut wired_controller = Item::controller();
        wired_controller.set_max_extras(ExtrasLimit::AtMost(0));
        wired_controller.set_wired();
        wired_controller.set_price(2.0)?;
        let wired_controller = wired_controller.into_shared();

        let mut console = Item::console();
        console.set_price(9.99)?;
        console.set_max_extras(ExtrasLimit::AtMost(4));
        console.add_extras(vec![
            wireless_controller.clone(),
            wireless_controller.clone(),
            wired_controller.clone(),
            wired_controller,
        ])?;
        let console = console.into_shared();

        let mut television_1 = Item::television();
        television_1.set_price(29.99)?;
        television_1.add_extras(vec![wireless_controller.clone(), wireless_controller.clone()])?;
        let television_1 = television_1.into_shared();

        let mut television_2 = Item::television();
        television_2.set_price(39.99)?;
        television_2.add_extras(vec![wireless_controller])?;
        let television_2 = television_2.into_shared();

        let mut microwave = Item::microwave();
        microwave.set_max_extras(ExtrasLimit::AtMost(0));
        microwave.set_price(20.99)?;
        let microwave = microwave.into_shared();

        let purchases = Collection::new(vec![
            console.clone(),
            television_1.clone(),
            television_2.clone(),
            microwave.clone(),
        ]);
        tracing::debug!(count = purchases.item_count(), "Built purchase fixture");

        Ok(Self {
            purchases,
            console,
            television_1,
            television_2,
            microwave,
        })
    }

    /// Look up a purchase by its fixture name
    pub fn get(&self, name: &str) -> Option<&ItemRef> {
        match name {
            "console" => Some(&self.console),
            "television_1" => Some(&self.television_1),
            "television_2" => Some(&self.television_2),
            "microwave" => Some(&self.microwave),
            _ => None,
        }
    }
}
