//! Static seed rows for the three upper hierarchy levels
//!
//! The department/category/subcategory tables are fixed editorial content;
//! only the product level is randomised. Ids are contiguous and sorted, so
//! the written tables enumerate in id order.

use crate::catalog::{Category, CategoryId, Department, DepartmentId, Subcategory, SubcategoryId};

fn department(id: u32, name: &str, description: &str) -> Department {
    Department {
        id: DepartmentId::new(id),
        name: name.into(),
        description: description.into(),
    }
}

fn category(id: u32, department_id: u32, name: &str, description: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        department_id: DepartmentId::new(department_id),
        name: name.into(),
        description: description.into(),
    }
}

fn subcategory(id: u32, category_id: u32, name: &str, description: &str) -> Subcategory {
    Subcategory {
        id: SubcategoryId::new(id),
        category_id: CategoryId::new(category_id),
        name: name.into(),
        description: description.into(),
    }
}

pub(super) fn departments() -> Vec<Department> {
    vec![
        department(1, "Fresh Foods", "Fresh fruits, vegetables, and perishables"),
        department(2, "Packaged Goods", "Shelf-stable packaged items and snacks"),
        department(3, "Frozen Foods", "Frozen meals, ice cream, and frozen ingredients"),
        department(4, "Dairy & Eggs", "Milk, cheese, yogurt, and egg products"),
        department(5, "Meat & Seafood", "Fresh and processed meats and seafood"),
        department(6, "Bakery", "Fresh baked goods and bread products"),
        department(7, "Beverages", "Drinks, juices, and liquid refreshments"),
        department(8, "Health & Personal Care", "Vitamins, supplements, and personal care items"),
    ]
}

pub(super) fn categories() -> Vec<Category> {
    vec![
        category(1, 1, "Fruits", "Fresh seasonal fruits"),
        category(2, 1, "Vegetables", "Fresh vegetables and herbs"),
        category(3, 1, "Salads & Prepared", "Ready-to-eat salads and prepared foods"),
        category(4, 2, "Snacks", "Chips, crackers, and snack foods"),
        category(5, 2, "Pantry Staples", "Canned goods, grains, and cooking essentials"),
        category(6, 2, "Condiments & Sauces", "Dressings, sauces, and flavor enhancers"),
        category(7, 2, "Breakfast Items", "Cereals, oatmeal, and breakfast foods"),
        category(8, 3, "Frozen Meals", "Complete frozen dinner options"),
        category(9, 3, "Ice Cream & Desserts", "Frozen treats and desserts"),
        category(10, 3, "Frozen Vegetables", "Flash-frozen vegetable products"),
        category(11, 3, "Frozen Proteins", "Frozen meat and seafood products"),
        category(12, 4, "Milk & Cream", "Various milk types and cream products"),
        category(13, 4, "Cheese", "Natural and processed cheese varieties"),
        category(14, 4, "Yogurt & Probiotics", "Yogurt and fermented dairy products"),
        category(15, 4, "Eggs", "Fresh eggs and egg products"),
        category(16, 5, "Fresh Meat", "Fresh cuts of beef, pork, and poultry"),
        category(17, 5, "Seafood", "Fresh and frozen fish and shellfish"),
        category(18, 5, "Deli & Prepared Meats", "Sliced meats and prepared options"),
        category(19, 6, "Bread & Rolls", "Fresh baked breads and dinner rolls"),
        category(20, 6, "Pastries & Desserts", "Cakes, cookies, and sweet treats"),
        category(21, 6, "Specialty Baked Goods", "Artisan and specialty baked items"),
        category(22, 7, "Soft Drinks", "Carbonated and flavored beverages"),
        category(23, 7, "Juices", "Fruit and vegetable juices"),
        category(24, 7, "Coffee & Tea", "Hot beverage products and accessories"),
        category(25, 8, "Vitamins & Supplements", "Health supplements and vitamins"),
        category(26, 8, "Personal Care", "Basic personal hygiene products"),
    ]
}

pub(super) fn subcategories() -> Vec<Subcategory> {
    vec![
        subcategory(1, 1, "Citrus Fruits", "Oranges, lemons, limes, and grapefruits"),
        subcategory(2, 1, "Berries", "Strawberries, blueberries, raspberries"),
        subcategory(3, 1, "Tropical Fruits", "Pineapples, mangoes, papayas"),
        subcategory(4, 1, "Stone Fruits", "Peaches, plums, apricots, cherries"),
        subcategory(5, 1, "Apples & Pears", "Various apple and pear varieties"),
        subcategory(6, 2, "Leafy Greens", "Lettuce, spinach, kale, arugula"),
        subcategory(7, 2, "Root Vegetables", "Carrots, potatoes, onions, turnips"),
        subcategory(8, 2, "Cruciferous Vegetables", "Broccoli, cauliflower, Brussels sprouts"),
        subcategory(9, 2, "Peppers & Squash", "Bell peppers, zucchini, squash varieties"),
        subcategory(10, 2, "Herbs & Aromatics", "Fresh herbs and aromatic vegetables"),
        subcategory(11, 3, "Pre-made Salads", "Ready-to-eat salad combinations"),
        subcategory(12, 3, "Cut Vegetables", "Pre-cut and prepared vegetables"),
        subcategory(13, 4, "Chips & Crisps", "Potato chips and similar snacks"),
        subcategory(14, 4, "Crackers", "Various cracker types and brands"),
        subcategory(15, 4, "Nuts & Seeds", "Roasted nuts and seed mixes"),
        subcategory(16, 4, "Candy & Sweets", "Chocolates, gummies, and confections"),
        subcategory(17, 5, "Canned Goods", "Canned vegetables, fruits, and soups"),
        subcategory(18, 5, "Rice & Grains", "Rice, quinoa, and grain products"),
        subcategory(19, 5, "Pasta & Noodles", "Dried pasta and noodle varieties"),
        subcategory(20, 5, "Cooking Oils", "Olive oil, vegetable oils, and specialty oils"),
        subcategory(21, 6, "Salad Dressings", "Bottled and homemade-style dressings"),
        subcategory(22, 6, "Hot Sauces", "Spicy condiments and pepper sauces"),
        subcategory(23, 6, "Marinades", "Meat and vegetable marinades"),
        subcategory(24, 7, "Cereals", "Cold breakfast cereals"),
        subcategory(25, 7, "Oatmeal & Hot Cereals", "Hot breakfast options"),
        subcategory(26, 7, "Pancake & Waffle Mix", "Breakfast baking mixes"),
        subcategory(27, 8, "Pizza", "Frozen pizza varieties"),
        subcategory(28, 8, "TV Dinners", "Complete frozen meal trays"),
        subcategory(29, 8, "International Cuisine", "Ethnic frozen food options"),
        subcategory(30, 9, "Ice Cream", "Premium and regular ice cream"),
        subcategory(31, 9, "Frozen Yogurt", "Healthier frozen dessert options"),
        subcategory(32, 9, "Popsicles & Bars", "Frozen treats on sticks"),
        subcategory(33, 10, "Mixed Vegetables", "Frozen vegetable medleys"),
        subcategory(34, 10, "Single Vegetables", "Individual frozen vegetables"),
        subcategory(35, 11, "Frozen Chicken", "Frozen chicken products"),
        subcategory(36, 11, "Frozen Seafood", "Frozen fish and shellfish"),
        subcategory(37, 12, "Regular Milk", "Whole, 2%, 1%, and skim milk"),
        subcategory(38, 12, "Alternative Milks", "Almond, soy, oat, and other plant milks"),
        subcategory(39, 12, "Cream Products", "Heavy cream, half-and-half, whipped cream"),
        subcategory(40, 13, "Hard Cheeses", "Cheddar, Swiss, parmesan varieties"),
        subcategory(41, 13, "Soft Cheeses", "Brie, camembert, cream cheese"),
        subcategory(42, 13, "Shredded Cheese", "Pre-shredded cheese blends"),
        subcategory(43, 14, "Greek Yogurt", "High-protein Greek-style yogurt"),
        subcategory(44, 14, "Regular Yogurt", "Traditional yogurt varieties"),
        subcategory(45, 14, "Probiotic Drinks", "Kefir and other probiotic beverages"),
        subcategory(46, 15, "Chicken Eggs", "Regular and free-range chicken eggs"),
        subcategory(47, 15, "Specialty Eggs", "Duck, quail, and other specialty eggs"),
        subcategory(48, 16, "Beef", "Fresh beef cuts and ground beef"),
        subcategory(49, 16, "Pork", "Pork chops, bacon, and pork products"),
        subcategory(50, 16, "Poultry", "Chicken, turkey, and other poultry"),
        subcategory(51, 17, "Fresh Fish", "Daily fresh fish selection"),
        subcategory(52, 17, "Shellfish", "Shrimp, crab, lobster, and mollusks"),
        subcategory(53, 18, "Sliced Meats", "Deli-sliced lunch meats"),
        subcategory(54, 18, "Prepared Sausages", "Ready-to-cook sausage varieties"),
        subcategory(55, 19, "Sandwich Bread", "Sliced bread for sandwiches"),
        subcategory(56, 19, "Artisan Breads", "Specialty and artisan bread varieties"),
        subcategory(57, 19, "Dinner Rolls", "Small rolls and buns"),
        subcategory(58, 20, "Cakes", "Fresh baked cakes and cupcakes"),
        subcategory(59, 20, "Cookies", "Fresh baked cookies and biscuits"),
        subcategory(60, 20, "Donuts & Pastries", "Donuts, croissants, and pastries"),
        subcategory(61, 21, "Gluten-Free Options", "Gluten-free baked goods"),
        subcategory(62, 21, "Seasonal Items", "Holiday and seasonal baked goods"),
        subcategory(63, 22, "Cola Drinks", "Cola and cola-flavored beverages"),
        subcategory(64, 22, "Flavored Sodas", "Fruit and specialty flavored sodas"),
        subcategory(65, 22, "Sparkling Water", "Carbonated water varieties"),
        subcategory(66, 23, "Orange Juice", "Fresh and from-concentrate orange juice"),
        subcategory(67, 23, "Mixed Fruit Juices", "Blended fruit juice varieties"),
        subcategory(68, 23, "Vegetable Juices", "V8 and other vegetable-based juices"),
        subcategory(69, 24, "Ground Coffee", "Pre-ground coffee varieties"),
        subcategory(70, 24, "Coffee Beans", "Whole bean coffee options"),
        subcategory(71, 24, "Tea Bags", "Bagged tea varieties"),
        subcategory(72, 24, "Loose Leaf Tea", "Bulk loose leaf tea options"),
        subcategory(73, 25, "Daily Vitamins", "Multivitamins and daily supplements"),
        subcategory(74, 25, "Specialty Supplements", "Targeted health supplements"),
        subcategory(75, 26, "Oral Care", "Toothpaste, mouthwash, dental care"),
        subcategory(76, 26, "Hair Care", "Shampoo, conditioner, styling products"),
    ]
}

/// Curated product names for the fruit subcategories; everything else falls
/// back to generic template expansion.
pub(super) fn product_templates(subcategory_id: u32) -> Option<&'static [&'static str]> {
    const CITRUS: &[&str] = &[
        "Navel Oranges",
        "Valencia Oranges",
        "Blood Oranges",
        "Mandarin Oranges",
        "Meyer Lemons",
        "Eureka Lemons",
        "Persian Limes",
        "Key Limes",
        "Ruby Red Grapefruit",
        "White Grapefruit",
        "Pink Grapefruit",
    ];
    const BERRIES: &[&str] = &[
        "Strawberries",
        "Blueberries",
        "Raspberries",
        "Blackberries",
        "Cranberries",
        "Gooseberries",
        "Elderberries",
        "Mulberries",
        "Organic Strawberries",
        "Wild Blueberries",
        "Golden Raspberries",
    ];
    const TROPICAL: &[&str] = &[
        "Pineapples",
        "Mangoes",
        "Papayas",
        "Passion Fruit",
        "Dragon Fruit",
        "Kiwi",
        "Star Fruit",
        "Coconuts",
        "Plantains",
        "Guava",
    ];
    const STONE: &[&str] = &[
        "Peaches",
        "Nectarines",
        "Plums",
        "Apricots",
        "Cherries",
        "Sweet Cherries",
        "Sour Cherries",
        "White Peaches",
        "Donut Peaches",
    ];
    const APPLES_PEARS: &[&str] = &[
        "Gala Apples",
        "Fuji Apples",
        "Granny Smith Apples",
        "Red Delicious Apples",
        "Honeycrisp Apples",
        "Bartlett Pears",
        "Anjou Pears",
        "Bosc Pears",
        "Asian Pears",
        "Seckel Pears",
    ];

    match subcategory_id {
        1 => Some(CITRUS),
        2 => Some(BERRIES),
        3 => Some(TROPICAL),
        4 => Some(STONE),
        5 => Some(APPLES_PEARS),
        _ => None,
    }
}
