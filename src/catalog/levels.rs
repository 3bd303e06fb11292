//! Level catalog data
//!
//! Eight categories, four levels each. Within a category the unlock gate
//! grows by three stars per level (0, 3, 6, 9), so finishing a level with
//! any rating opens the next one.

use once_cell::sync::Lazy;

use super::{Category, ItemData, LearningItem, Level};

fn word(id: &'static str, name: &'static str, pronunciation: &'static str) -> LearningItem {
    LearningItem {
        id,
        name,
        pronunciation,
        data: None,
    }
}

fn number(value: u32, id: &'static str, name: &'static str, pronunciation: &'static str) -> LearningItem {
    LearningItem {
        id,
        name,
        pronunciation,
        data: Some(ItemData::Number {
            value,
            count: value,
        }),
    }
}

fn color(id: &'static str, name: &'static str, pronunciation: &'static str, hex: &'static str) -> LearningItem {
    LearningItem {
        id,
        name,
        pronunciation,
        data: Some(ItemData::Color { hex }),
    }
}

fn shape(id: &'static str, name: &'static str, pronunciation: &'static str) -> LearningItem {
    LearningItem {
        id,
        name,
        pronunciation,
        data: Some(ItemData::Shape { kind: id }),
    }
}

pub static LEVELS: Lazy<Vec<Level>> = Lazy::new(|| {
    vec![
        // Animals
        Level {
            id: "animals-1",
            category: Category::Animals,
            level_number: 1,
            title: "Farm Animals",
            required_stars: 0,
            items: vec![
                word("cow", "Cow", "cow"),
                word("chicken", "Chicken", "chicken"),
                word("sheep", "Sheep", "sheep"),
                word("horse", "Horse", "horse"),
                word("duck", "Duck", "duck"),
                word("goat", "Goat", "goat"),
                word("rabbit", "Rabbit", "rabbit"),
                word("donkey", "Donkey", "donkey"),
                word("rooster", "Rooster", "rooster"),
            ],
        },
        Level {
            id: "animals-2",
            category: Category::Animals,
            level_number: 2,
            title: "Wild Animals",
            required_stars: 3,
            items: vec![
                word("lion", "Lion", "lion"),
                word("elephant", "Elephant", "elephant"),
                word("tiger", "Tiger", "tiger"),
                word("bear", "Bear", "bear"),
                word("monkey", "Monkey", "monkey"),
                word("giraffe", "Giraffe", "giraffe"),
                word("zebra", "Zebra", "zebra"),
                word("wolf", "Wolf", "wolf"),
                word("fox", "Fox", "fox"),
                word("panda", "Panda", "panda"),
            ],
        },
        Level {
            id: "animals-3",
            category: Category::Animals,
            level_number: 3,
            title: "Sea Animals",
            required_stars: 6,
            items: vec![
                word("fish", "Fish", "fish"),
                word("dolphin", "Dolphin", "dolphin"),
                word("whale", "Whale", "whale"),
                word("shark", "Shark", "shark"),
                word("octopus", "Octopus", "octopus"),
                word("seal", "Seal", "seal"),
            ],
        },
        Level {
            id: "animals-4",
            category: Category::Animals,
            level_number: 4,
            title: "Birds",
            required_stars: 9,
            items: vec![
                word("eagle", "Eagle", "eagle"),
                word("owl", "Owl", "owl"),
                word("parrot", "Parrot", "parrot"),
                word("penguin", "Penguin", "penguin"),
                word("flamingo", "Flamingo", "flamingo"),
                word("peacock", "Peacock", "peacock"),
            ],
        },
        // Numbers
        Level {
            id: "numbers-1",
            category: Category::Numbers,
            level_number: 1,
            title: "Numbers 1-5",
            required_stars: 0,
            items: vec![
                number(1, "1", "One", "one"),
                number(2, "2", "Two", "two"),
                number(3, "3", "Three", "three"),
                number(4, "4", "Four", "four"),
                number(5, "5", "Five", "five"),
            ],
        },
        Level {
            id: "numbers-2",
            category: Category::Numbers,
            level_number: 2,
            title: "Numbers 6-10",
            required_stars: 3,
            items: vec![
                number(6, "6", "Six", "six"),
                number(7, "7", "Seven", "seven"),
                number(8, "8", "Eight", "eight"),
                number(9, "9", "Nine", "nine"),
                number(10, "10", "Ten", "ten"),
            ],
        },
        Level {
            id: "numbers-3",
            category: Category::Numbers,
            level_number: 3,
            title: "Numbers 11-15",
            required_stars: 6,
            items: vec![
                number(11, "11", "Eleven", "eleven"),
                number(12, "12", "Twelve", "twelve"),
                number(13, "13", "Thirteen", "thirteen"),
                number(14, "14", "Fourteen", "fourteen"),
                number(15, "15", "Fifteen", "fifteen"),
            ],
        },
        Level {
            id: "numbers-4",
            category: Category::Numbers,
            level_number: 4,
            title: "Numbers 16-20",
            required_stars: 9,
            items: vec![
                number(16, "16", "Sixteen", "sixteen"),
                number(17, "17", "Seventeen", "seventeen"),
                number(18, "18", "Eighteen", "eighteen"),
                number(19, "19", "Nineteen", "nineteen"),
                number(20, "20", "Twenty", "twenty"),
            ],
        },
        // Colors
        Level {
            id: "colors-1",
            category: Category::Colors,
            level_number: 1,
            title: "Basic Colors",
            required_stars: 0,
            items: vec![
                color("red", "Red", "red", "#FF0000"),
                color("blue", "Blue", "blue", "#0000FF"),
                color("yellow", "Yellow", "yellow", "#FFFF00"),
                color("green", "Green", "green", "#00FF00"),
                color("orange", "Orange", "orange", "#FFA500"),
            ],
        },
        Level {
            id: "colors-2",
            category: Category::Colors,
            level_number: 2,
            title: "More Colors",
            required_stars: 3,
            items: vec![
                color("purple", "Purple", "purple", "#800080"),
                color("pink", "Pink", "pink", "#FFC0CB"),
                color("brown", "Brown", "brown", "#A52A2A"),
                color("black", "Black", "black", "#000000"),
                color("white", "White", "white", "#FFFFFF"),
                color("gray", "Gray", "gray", "#808080"),
            ],
        },
        Level {
            id: "colors-3",
            category: Category::Colors,
            level_number: 3,
            title: "Pastel Colors",
            required_stars: 6,
            items: vec![
                color("lavender", "Lavender", "lavender", "#E6E6FA"),
                color("mint", "Mint", "mint", "#98FF98"),
                color("peach", "Peach", "peach", "#FFDAB9"),
                color("sky-blue", "Sky Blue", "sky blue", "#87CEEB"),
                color("rose", "Rose", "rose", "#FFB6C1"),
            ],
        },
        Level {
            id: "colors-4",
            category: Category::Colors,
            level_number: 4,
            title: "Bright Colors",
            required_stars: 9,
            items: vec![
                color("cyan", "Cyan", "cyan", "#00FFFF"),
                color("magenta", "Magenta", "magenta", "#FF00FF"),
                color("lime", "Lime", "lime", "#00FF00"),
                color("gold", "Gold", "gold", "#FFD700"),
                color("silver", "Silver", "silver", "#C0C0C0"),
            ],
        },
        // Shapes
        Level {
            id: "shapes-1",
            category: Category::Shapes,
            level_number: 1,
            title: "Basic Shapes",
            required_stars: 0,
            items: vec![
                shape("circle", "Circle", "circle"),
                shape("square", "Square", "square"),
                shape("triangle", "Triangle", "triangle"),
                shape("rectangle", "Rectangle", "rectangle"),
                shape("star", "Star", "star"),
            ],
        },
        Level {
            id: "shapes-2",
            category: Category::Shapes,
            level_number: 2,
            title: "More Shapes",
            required_stars: 3,
            items: vec![
                shape("oval", "Oval", "oval"),
                shape("diamond", "Diamond", "diamond"),
                shape("heart", "Heart", "heart"),
                shape("hexagon", "Hexagon", "hexagon"),
                shape("pentagon", "Pentagon", "pentagon"),
            ],
        },
        Level {
            id: "shapes-3",
            category: Category::Shapes,
            level_number: 3,
            title: "Advanced Shapes",
            required_stars: 6,
            items: vec![
                shape("trapezoid", "Trapezoid", "trapezoid"),
                shape("parallelogram", "Parallelogram", "parallelogram"),
                shape("rhombus", "Rhombus", "rhombus"),
                shape("crescent", "Crescent", "crescent"),
                shape("arrow", "Arrow", "arrow"),
            ],
        },
        Level {
            id: "shapes-4",
            category: Category::Shapes,
            level_number: 4,
            title: "3D Shapes",
            required_stars: 9,
            items: vec![
                shape("cube", "Cube", "cube"),
                shape("sphere", "Sphere", "sphere"),
                shape("cylinder", "Cylinder", "cylinder"),
                shape("cone", "Cone", "cone"),
                shape("pyramid", "Pyramid", "pyramid"),
            ],
        },
        // Countries
        Level {
            id: "countries-1",
            category: Category::Countries,
            level_number: 1,
            title: "Countries",
            required_stars: 0,
            items: vec![
                word("france", "France", "france"),
                word("usa", "USA", "usa"),
                word("uk", "UK", "uk"),
                word("japan", "Japan", "japan"),
                word("brazil", "Brazil", "brazil"),
                word("egypt", "Egypt", "egypt"),
            ],
        },
        Level {
            id: "countries-2",
            category: Category::Countries,
            level_number: 2,
            title: "European Countries",
            required_stars: 3,
            items: vec![
                word("germany", "Germany", "germany"),
                word("spain", "Spain", "spain"),
                word("italy", "Italy", "italy"),
                word("greece", "Greece", "greece"),
                word("netherlands", "Netherlands", "netherlands"),
                word("sweden", "Sweden", "sweden"),
            ],
        },
        Level {
            id: "countries-3",
            category: Category::Countries,
            level_number: 3,
            title: "Asian Countries",
            required_stars: 6,
            items: vec![
                word("china", "China", "china"),
                word("india", "India", "india"),
                word("south-korea", "South Korea", "south korea"),
                word("thailand", "Thailand", "thailand"),
                word("singapore", "Singapore", "singapore"),
                word("indonesia", "Indonesia", "indonesia"),
            ],
        },
        Level {
            id: "countries-4",
            category: Category::Countries,
            level_number: 4,
            title: "African Countries",
            required_stars: 9,
            items: vec![
                word("south-africa", "South Africa", "south africa"),
                word("kenya", "Kenya", "kenya"),
                word("morocco", "Morocco", "morocco"),
                word("nigeria", "Nigeria", "nigeria"),
                word("tanzania", "Tanzania", "tanzania"),
                word("ghana", "Ghana", "ghana"),
            ],
        },
        // Fruits & Vegetables
        Level {
            id: "fruits-1",
            category: Category::Fruits,
            level_number: 1,
            title: "Fruits & Vegetables",
            required_stars: 0,
            items: vec![
                word("apple", "Apple", "apple"),
                word("banana", "Banana", "banana"),
                // "orange" the color already owns the plain id
                word("orange-fruit", "Orange", "orange"),
                word("carrot", "Carrot", "carrot"),
                word("tomato", "Tomato", "tomato"),
                word("broccoli", "Broccoli", "broccoli"),
            ],
        },
        Level {
            id: "fruits-2",
            category: Category::Fruits,
            level_number: 2,
            title: "More Fruits",
            required_stars: 3,
            items: vec![
                word("strawberry", "Strawberry", "strawberry"),
                word("grape", "Grape", "grape"),
                word("watermelon", "Watermelon", "watermelon"),
                word("pineapple", "Pineapple", "pineapple"),
                word("mango", "Mango", "mango"),
                word("kiwi", "Kiwi", "kiwi"),
            ],
        },
        Level {
            id: "fruits-3",
            category: Category::Fruits,
            level_number: 3,
            title: "More Vegetables",
            required_stars: 6,
            items: vec![
                word("potato", "Potato", "potato"),
                word("onion", "Onion", "onion"),
                word("pepper", "Pepper", "pepper"),
                word("cucumber", "Cucumber", "cucumber"),
                word("lettuce", "Lettuce", "lettuce"),
                word("corn", "Corn", "corn"),
            ],
        },
        Level {
            id: "fruits-4",
            category: Category::Fruits,
            level_number: 4,
            title: "Mixed Fruits & Vegetables",
            required_stars: 9,
            items: vec![
                word("cherry", "Cherry", "cherry"),
                word("pear", "Pear", "pear"),
                word("cabbage", "Cabbage", "cabbage"),
                word("spinach", "Spinach", "spinach"),
                word("peas", "Peas", "peas"),
                word("beans", "Beans", "beans"),
            ],
        },
        // Sports
        Level {
            id: "sports-1",
            category: Category::Sports,
            level_number: 1,
            title: "Sports",
            required_stars: 0,
            items: vec![
                word("football", "Football", "football"),
                word("basketball", "Basketball", "basketball"),
                word("tennis", "Tennis", "tennis"),
                word("swimming", "Swimming", "swimming"),
                word("cycling", "Cycling", "cycling"),
                word("running", "Running", "running"),
            ],
        },
        Level {
            id: "sports-2",
            category: Category::Sports,
            level_number: 2,
            title: "Water Sports",
            required_stars: 3,
            items: vec![
                word("surfing", "Surfing", "surfing"),
                word("diving", "Diving", "diving"),
                word("sailing", "Sailing", "sailing"),
                word("water-polo", "Water Polo", "water polo"),
                word("rowing", "Rowing", "rowing"),
                word("kayaking", "Kayaking", "kayaking"),
            ],
        },
        Level {
            id: "sports-3",
            category: Category::Sports,
            level_number: 3,
            title: "Winter Sports",
            required_stars: 6,
            items: vec![
                word("skiing", "Skiing", "skiing"),
                word("snowboarding", "Snowboarding", "snowboarding"),
                word("ice-skating", "Ice Skating", "ice skating"),
                word("hockey", "Hockey", "hockey"),
                word("curling", "Curling", "curling"),
                word("sledding", "Sledding", "sledding"),
            ],
        },
        Level {
            id: "sports-4",
            category: Category::Sports,
            level_number: 4,
            title: "Team Sports",
            required_stars: 9,
            items: vec![
                word("volleyball", "Volleyball", "volleyball"),
                word("baseball", "Baseball", "baseball"),
                word("soccer", "Soccer", "soccer"),
                word("rugby", "Rugby", "rugby"),
                word("cricket", "Cricket", "cricket"),
                word("handball", "Handball", "handball"),
            ],
        },
        // Vehicles
        Level {
            id: "vehicles-1",
            category: Category::Vehicles,
            level_number: 1,
            title: "Vehicles",
            required_stars: 0,
            items: vec![
                word("car", "Car", "car"),
                word("bus", "Bus", "bus"),
                word("train", "Train", "train"),
                word("airplane", "Airplane", "airplane"),
                word("boat", "Boat", "boat"),
                word("bicycle", "Bicycle", "bicycle"),
            ],
        },
        Level {
            id: "vehicles-2",
            category: Category::Vehicles,
            level_number: 2,
            title: "Air Vehicles",
            required_stars: 3,
            items: vec![
                word("helicopter", "Helicopter", "helicopter"),
                word("rocket", "Rocket", "rocket"),
                word("hot-air-balloon", "Hot Air Balloon", "hot air balloon"),
                word("drone", "Drone", "drone"),
                word("glider", "Glider", "glider"),
                word("jet", "Jet", "jet"),
            ],
        },
        Level {
            id: "vehicles-3",
            category: Category::Vehicles,
            level_number: 3,
            title: "Water Vehicles",
            required_stars: 6,
            items: vec![
                word("ship", "Ship", "ship"),
                word("submarine", "Submarine", "submarine"),
                word("yacht", "Yacht", "yacht"),
                word("ferry", "Ferry", "ferry"),
                word("canoe", "Canoe", "canoe"),
                word("sailboat", "Sailboat", "sailboat"),
            ],
        },
        Level {
            id: "vehicles-4",
            category: Category::Vehicles,
            level_number: 4,
            title: "Construction Vehicles",
            required_stars: 9,
            items: vec![
                word("truck", "Truck", "truck"),
                word("bulldozer", "Bulldozer", "bulldozer"),
                word("crane", "Crane", "crane"),
                word("excavator", "Excavator", "excavator"),
                word("tractor", "Tractor", "tractor"),
                word("forklift", "Forklift", "forklift"),
            ],
        },
    ]
});
