//! Property tests for selection invariants and the nutrition combinator.

use std::collections::BTreeMap;

use brew_menu::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Action {
    Toggle(usize),
    Tier(i64),
    Focus,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => (0usize..6).prop_map(Action::Toggle),
        1 => (1i64..=3).prop_map(Action::Tier),
        1 => Just(Action::Focus),
    ]
}

/// Ingredients offering a non-empty subset of tiers 1..=3.
fn ingredients() -> impl Strategy<Value = Vec<Ingredient>> {
    prop::collection::vec((prop::collection::btree_set(1i64..=3, 1..=3), 0i64..100), 1..6).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(index, (tiers, price))| {
                    tiers.into_iter().fold(
                        Ingredient::new(format!("i{index}"), format!("Ingredient {index}")),
                        |ingredient, quantity| {
                            ingredient.with_variation(QuantityVariation::new(
                                format!("x{quantity}"),
                                quantity,
                                price * quantity,
                            ))
                        },
                    )
                })
                .collect()
        },
    )
}

fn group(policy: ChoicePolicy, max: i64, ingredients: Vec<Ingredient>) -> CompositionGroup {
    ingredients.into_iter().fold(
        CompositionGroup::new("g", "Group", policy).with_max_total_quantity(max),
        |group, ingredient| group.with_ingredient(ingredient),
    )
}

fn run(resolver: &mut Resolver, action: &Action) -> Selection {
    let code = GroupCode::new("g");
    match action {
        Action::Toggle(index) => {
            resolver.toggle_ingredient(&code, &IngredientId::new(format!("i{index}")))
        }
        Action::Tier(quantity) => resolver.select_tier(&code, *quantity),
        Action::Focus => resolver.select_group(&code),
    }
}

fn facts() -> impl Strategy<Value = NutritionFacts> {
    let field = || prop::option::of((0i32..1000).prop_map(f64::from));
    (field(), field(), field(), field(), field()).prop_map(
        |(fat, protein, carbohydrate, kilocalories, weight)| NutritionFacts {
            fat,
            protein,
            carbohydrate,
            kilocalories,
            weight,
        },
    )
}

proptest! {
    #[test]
    fn single_group_always_has_one_selection(
        members in ingredients(),
        actions in prop::collection::vec(action(), 0..30),
    ) {
        let mut resolver = Resolver::default();
        let selection = resolver.set_active_product(&[group(ChoicePolicy::Single, 1, members)]);
        let state = selection.group(&GroupCode::new("g")).unwrap();
        prop_assert_eq!(state.selected_members().count(), 1);

        for action in &actions {
            let selection = run(&mut resolver, action);
            let state = selection.group(&GroupCode::new("g")).unwrap();
            if !state.members.is_empty() {
                prop_assert_eq!(state.selected_members().count(), 1);
            }
        }
    }

    #[test]
    fn multi_group_respects_cap(
        members in ingredients(),
        max in 3i64..=6,
        actions in prop::collection::vec(action(), 0..30),
    ) {
        let mut resolver = Resolver::default();
        resolver.set_active_product(&[group(ChoicePolicy::Multi, max, members)]);

        for action in &actions {
            let selection = run(&mut resolver, action);
            let state = selection.group(&GroupCode::new("g")).unwrap();
            prop_assert!(state.selected_quantity() <= max);
        }
    }

    #[test]
    fn none_group_never_selects(
        members in ingredients(),
        actions in prop::collection::vec(action(), 0..30),
    ) {
        let mut resolver = Resolver::default();
        resolver.set_active_product(&[group(ChoicePolicy::None, 0, members)]);

        for action in &actions {
            let selection = run(&mut resolver, action);
            let state = selection.group(&GroupCode::new("g")).unwrap();
            prop_assert_eq!(state.selected_members().count(), 0);
            prop_assert!(resolver.selected_ingredients().is_empty());
        }
    }

    #[test]
    fn tier_switch_aligns_members(
        members in ingredients(),
        actions in prop::collection::vec(action(), 0..30),
    ) {
        let mut resolver = Resolver::default();
        resolver.set_active_product(&[group(ChoicePolicy::Multi, 6, members)]);

        for action in &actions {
            let selection = run(&mut resolver, action);
            if let Action::Tier(quantity) = action {
                let state = selection.group(&GroupCode::new("g")).unwrap();
                if state.tiers.iter().any(|t| t.quantity == *quantity) {
                    prop_assert!(state.members.iter().all(|m| m.active_variation.quantity == *quantity));
                    prop_assert_eq!(state.selected_tier().map(|t| t.quantity), Some(*quantity));
                    prop_assert!(state
                        .members
                        .iter()
                        .all(|m| m.ingredient.offers(*quantity)));
                }
            }
        }
    }

    #[test]
    fn combine_is_commutative(a in facts(), b in facts()) {
        prop_assert_eq!(a.combine(&b), b.combine(&a));
    }

    #[test]
    fn absent_is_identity(a in facts()) {
        prop_assert_eq!(a.combine(&NutritionFacts::absent()), a);
        prop_assert_eq!(NutritionFacts::absent().combine(&a), a);
    }

    #[test]
    fn combine_is_associative(a in facts(), b in facts(), c in facts()) {
        prop_assert_eq!(a.combine(&b).combine(&c), a.combine(&b.combine(&c)));
    }

    #[test]
    fn projection_is_deterministic(
        price in 0i64..1000,
        nutrition in prop::option::of(facts()),
        items in prop::collection::vec((0i64..200, facts()), 0..6),
    ) {
        let base = ProductBase { price, nutrition };
        let selected: BTreeMap<IngredientId, QuantityVariation> = items
            .into_iter()
            .enumerate()
            .map(|(index, (price, facts))| {
                (
                    IngredientId::new(format!("i{index}")),
                    QuantityVariation::new("Standard", 1, price).with_food_value(facts),
                )
            })
            .collect();

        let first = project(&base, &selected);
        let second = project(&base, &selected);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first.nutrition.is_some(), nutrition.is_some());
        prop_assert_eq!(
            first.price,
            price + selected.values().map(|v| v.price).sum::<i64>()
        );
    }
}
