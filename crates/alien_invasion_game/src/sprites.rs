use alien_invasion_common::Sprite;

pub const SHIP: Sprite = Sprite::new(&[
    ".....##.....",
    ".....##.....",
    "....####....",
    "....####....",
    "...######...",
    ".##########.",
    "############",
    "############",
    "##.######.##",
    "#...####...#",
]);

pub const ALIEN: Sprite = Sprite::new(&[
    "..#.....#..",
    "...#...#...",
    "..#######..",
    ".##.###.##.",
    "###########",
    "#.#######.#",
    "#.#.....#.#",
    "...##.##...",
]);
