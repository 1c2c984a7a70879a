//! Demo catalog content.
//!
//! The four fabrics the storefront historically shipped with. Loaded at
//! startup when `catalog.seed_demo_data` is enabled, mostly useful for local
//! development and integration tests.

use tkani_models::{FabricDetails, FabricDraft};

/// The built-in demo fabrics, in catalog order.
pub fn demo_fabrics() -> Vec<FabricDraft> {
    vec![
        FabricDraft {
            name: "Хлопок Премиум".to_string(),
            category: "Хлопок".to_string(),
            price: 850.0,
            image: "https://images.unsplash.com/photo-1528459199957-0ff28496a7f6".to_string(),
            description: "Мягкий хлопок высокого качества для пошива одежды".to_string(),
            details: FabricDetails {
                width: "150 см".to_string(),
                weight: "240 г/м²".to_string(),
                composition: "100% хлопок".to_string(),
                origin: "Россия".to_string(),
                care_instructions: "Машинная стирка при 30°C, не отбеливать, средний нагрев при глажке"
                    .to_string(),
            },
            features: vec![
                "Высокая прочность".to_string(),
                "Гипоаллергенность".to_string(),
                "Воздухопроницаемость".to_string(),
                "Долговечность".to_string(),
            ],
            applications: vec![
                "Пошив повседневной одежды".to_string(),
                "Рубашки, блузки, платья".to_string(),
                "Детская одежда".to_string(),
                "Домашний текстиль".to_string(),
            ],
        },
        FabricDraft {
            name: "Шёлк Натуральный".to_string(),
            category: "Шёлк".to_string(),
            price: 2800.0,
            image: "https://images.unsplash.com/photo-1620437064667-949239d3540e".to_string(),
            description: "Гладкий и блестящий натуральный шёлк для изысканной одежды".to_string(),
            details: FabricDetails {
                width: "135 см".to_string(),
                weight: "75 г/м²".to_string(),
                composition: "100% натуральный шёлк".to_string(),
                origin: "Китай".to_string(),
                care_instructions: "Ручная стирка, не отбеливать, не отжимать, сушить в расправленном виде"
                    .to_string(),
            },
            features: vec![
                "Природный блеск".to_string(),
                "Высокая прочность".to_string(),
                "Гипоаллергенность".to_string(),
                "Терморегуляция".to_string(),
            ],
            applications: vec![
                "Вечерние наряды".to_string(),
                "Блузки и платья".to_string(),
                "Постельное белье".to_string(),
                "Шарфы и платки".to_string(),
            ],
        },
        FabricDraft {
            name: "Лён Классический".to_string(),
            category: "Лён".to_string(),
            price: 1200.0,
            image: "https://images.unsplash.com/photo-1596149615493-f0739de31c2d".to_string(),
            description: "Натуральный лён для летней одежды и домашнего текстиля".to_string(),
            details: FabricDetails {
                width: "150 см".to_string(),
                weight: "170 г/м²".to_string(),
                composition: "100% лён".to_string(),
                origin: "Беларусь".to_string(),
                care_instructions: "Машинная стирка при 40°C, не отбеливать, высокая температура глажки"
                    .to_string(),
            },
            features: vec![
                "Высокая прочность".to_string(),
                "Экологичность".to_string(),
                "Воздухопроницаемость".to_string(),
                "Антибактериальные свойства".to_string(),
            ],
            applications: vec![
                "Летняя одежда".to_string(),
                "Скатерти и салфетки".to_string(),
                "Полотенца".to_string(),
                "Постельное белье".to_string(),
            ],
        },
        FabricDraft {
            name: "Шерсть Мериноса".to_string(),
            category: "Шерсть".to_string(),
            price: 3200.0,
            image: "https://images.unsplash.com/photo-1598030550086-994c3878bea8".to_string(),
            description: "Мягкая и тёплая шерсть мериноса для зимней одежды".to_string(),
            details: FabricDetails {
                width: "140 см".to_string(),
                weight: "300 г/м²".to_string(),
                composition: "100% шерсть мериноса".to_string(),
                origin: "Австралия".to_string(),
                care_instructions: "Ручная стирка в холодной воде, сушить в расправленном виде".to_string(),
            },
            features: vec![
                "Мягкость".to_string(),
                "Терморегуляция".to_string(),
                "Не вызывает раздражения".to_string(),
                "Отводит влагу".to_string(),
            ],
            applications: vec![
                "Верхняя одежда".to_string(),
                "Пальто и жакеты".to_string(),
                "Свитера, кардиганы".to_string(),
                "Шарфы и шапки".to_string(),
            ],
        },
    ]
}
