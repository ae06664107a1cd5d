//! Sample records loaded at startup.

use crate::model::{IdGenerator, IdPolicy, Instrument, InstrumentId};

struct SampleInstrument {
    name: &'static str,
    category: &'static str,
    description: &'static str,
    price: f64,
    stock: u64,
    rating: f64,
    image: &'static str,
}

const INSTRUMENTS: &[SampleInstrument] = &[
    SampleInstrument {
        name: "Fender Stratocaster",
        category: "Гитары",
        description: "Электрогитара, корпус из ольхи, гриф из клена",
        price: 85000.0,
        stock: 5,
        rating: 4.8,
        image: "img1.webp",
    },
    SampleInstrument {
        name: "Yamaha C40",
        category: "Гитары",
        description: "Классическая гитара для начинающих",
        price: 12000.0,
        stock: 15,
        rating: 4.5,
        image: "img2.jpg",
    },
    SampleInstrument {
        name: "Roland TD-1DMK",
        category: "Ударные",
        description: "Электронная ударная установка",
        price: 65000.0,
        stock: 3,
        rating: 4.7,
        image: "img3.jpg",
    },
    SampleInstrument {
        name: "Yamaha P-125",
        category: "Клавишные",
        description: "Цифровое пианино с молоточковой механикой",
        price: 55000.0,
        stock: 7,
        rating: 4.9,
        image: "img4.webp",
    },
    SampleInstrument {
        name: "Shure SM58",
        category: "Микрофоны",
        description: "Вокальный динамический микрофон",
        price: 8500.0,
        stock: 20,
        rating: 4.8,
        image: "img5.webp",
    },
    SampleInstrument {
        name: "Boss DS-1",
        category: "Педали эффектов",
        description: "Педаль дисторшн для гитары",
        price: 6500.0,
        stock: 12,
        rating: 4.6,
        image: "img6.webp",
    },
    SampleInstrument {
        name: "Ibanez GSR200",
        category: "Бас-гитары",
        description: "4-струнная бас-гитара",
        price: 28000.0,
        stock: 8,
        rating: 4.4,
        image: "img7.jpg",
    },
    SampleInstrument {
        name: "Zildjian A Custom",
        category: "Тарелки",
        description: "Комплект тарелок 14\" хай-хет, 16\" и 18\" крэш, 20\" райд",
        price: 45000.0,
        stock: 4,
        rating: 4.9,
        image: "img8.jpg",
    },
    SampleInstrument {
        name: "Native Instruments Komplete",
        category: "Софт",
        description: "Контроллер и софт для создания музыки",
        price: 35000.0,
        stock: 6,
        rating: 4.7,
        image: "img9.webp",
    },
    SampleInstrument {
        name: "Fender Precision Bass",
        category: "Бас-гитары",
        description: "Легендарная бас-гитара",
        price: 75000.0,
        stock: 3,
        rating: 4.8,
        image: "img10.jpg",
    },
];

const PRODUCTS: &[(u64, &str, f64)] = &[
    (1, "Капучино", 350.0),
    (2, "Американо", 200.0),
    (3, "Латте", 300.0),
];

/// The ten sample instruments, with image URLs under `<public_url>/images/`.
pub fn instruments(generator: &mut IdGenerator, public_url: &str) -> Vec<Instrument> {
    let base = public_url.trim_end_matches('/');
    INSTRUMENTS
        .iter()
        .map(|sample| Instrument {
            id: generator.next_id(),
            name: sample.name.to_string(),
            category: Some(sample.category.to_string()),
            description: Some(sample.description.to_string()),
            price: sample.price,
            stock: Some(sample.stock),
            rating: Some(sample.rating),
            image: Some(format!("{}/images/{}", base, sample.image)),
        })
        .collect()
}

/// The three sample products. Under the timestamp policy they keep their
/// historical ids 1, 2 and 3; otherwise they get generated ids.
pub fn products(generator: &mut IdGenerator) -> Vec<Instrument> {
    let explicit = generator.policy() == IdPolicy::Timestamp;
    PRODUCTS
        .iter()
        .map(|&(id, name, price)| {
            let id = if explicit {
                let id = InstrumentId::Numeric(id);
                generator.reserve(&id);
                id
            } else {
                generator.next_id()
            };
            Instrument {
                id,
                name: name.to_string(),
                category: None,
                description: None,
                price,
                stock: None,
                rating: None,
                image: None,
            }
        })
        .collect()
}
