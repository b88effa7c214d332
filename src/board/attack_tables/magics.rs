//! Magic multipliers and shift widths for the sliding attack tables.
//!
//! These constants are inputs: they were found offline by a search tool
//! and are verified at table-construction time to map every relevant
//! sub-occupancy to a bucket without destructive collisions. The shift
//! for a square always equals `64 - popcount(relevant_mask)`.

pub(crate) const ROOK_MAGICS: [u64; 64] = [
    0x0080_0014_2040_0280,
    0x0cc0_0020_0090_0842,
    0x0100_2001_0210_4008,
    0x0100_2009_0004_1001,
    0x2080_020c_0008_0080,
    0x0200_0806_0001_9004,
    0x0400_3204_0099_1018,
    0x0200_0088_4021_020c,
    0x2400_8000_4010_6080,
    0x2000_4010_0120_0149,
    0x2000_8010_0820_0080,
    0x42a2_0040_2012_0038,
    0x0010_8008_0080_0402,
    0x0006_0008_0442_0030,
    0x400b_0004_4e00_8100,
    0x2005_8000_4080_0100,
    0x0000_8480_00c0_0020,
    0x0020_0380_2040_0080,
    0x000a_8200_1020_4201,
    0x0000_8080_1000_1800,
    0x0287_0100_0801_0411,
    0x0048_8080_4400_0600,
    0x0009_8080_0100_0200,
    0x0018_0200_0140_8904,
    0x0104_8020_8000_4001,
    0x1000_2004_c000_5003,
    0x0000_1008_8020_0082,
    0x8008_1000_8028_0080,
    0x0048_0082_8008_8400,
    0x4200_0400_8002_0080,
    0x0002_0002_0008_0104,
    0x4020_2082_0000_4104,
    0x5280_0020_1840_0441,
    0x1000_8021_0300_4008,
    0x10a0_0024_8080_1002,
    0x0201_8088_0080_5000,
    0x8060_1400_8080_0800,
    0x0200_4020_1801_1004,
    0x8002_1003_0400_c812,
    0x0002_408c_0200_0051,
    0x0000_8440_0220_8000,
    0x0030_0220_0242_c002,
    0x2408_2000_5101_0040,
    0x0002_5000_2101_0008,
    0x2054_4400_0800_8080,
    0x2002_0018_8502_0010,
    0x1025_8130_8a04_0008,
    0x0020_0100_806a_0004,
    0x0020_2480_0040_0080,
    0x40c0_0080_4060_1180,
    0x0040_1100_4020_0300,
    0x2040_3001_8008_0180,
    0x3300_8008_0004_0080,
    0x0c82_0044_9008_0200,
    0x8006_1210_8508_0400,
    0x0000_8000_4b00_0080,
    0x2001_0250_4080_0021,
    0x0800_1100_2040_0581,
    0x0a19_4120_0050_0b01,
    0x1010_0020_0804_1101,
    0x0522_0004_1820_1002,
    0x2049_0024_0008_0205,
    0x0081_9021_8802_010c,
    0x8400_0240_8100_2c02,
];

pub(crate) const BISHOP_MAGICS: [u64; 64] = [
    0x0892_5484_0404_00a1,
    0x6220_4c03_0041_0400,
    0x0013_0104_0100_0985,
    0x1220_9200_4001_3200,
    0x3065_1040_5004_0240,
    0x8222_0130_2810_0000,
    0x0000_4404_2440_4810,
    0x0070_6482_1010_0e10,
    0x0200_2410_8202_0400,
    0x2804_3104_0112_2220,
    0x80c0_1408_220a_4004,
    0x0000_0c04_0081_8002,
    0x0000_0710_4021_0400,
    0x0028_0128_2050_0080,
    0x0000_2400_8250_900c,
    0x0582_0ee0_8804_1020,
    0x0220_8890_0210_013a,
    0x1802_0119_4801_0410,
    0x010c_0008_0054_0208,
    0x2008_4024_0400_0804,
    0x0840_8004_00a0_2000,
    0x0631_0000_8041_4000,
    0xc000_8042_180c_0208,
    0x8040_8002_1041_081c,
    0x3008_0480_1810_1084,
    0x0154_1a00_1002_0842,
    0x0080_8202_3000_6200,
    0x3008_0800_0182_0022,
    0x02ca_8400_0480_2020,
    0x0000_4080_1100_a010,
    0x0021_0041_1104_1010,
    0x8009_0440_002a_0800,
    0x8210_0210_0320_0c02,
    0x0009_0120_0030_1410,
    0x060c_0024_0002_1404,
    0xb000_400a_0000_2200,
    0x2010_0082_0000_2200,
    0x0084_0804_8050_3000,
    0x0084_2104_0012_0280,
    0x0028_0461_0002_8080,
    0x0002_0220_04a0_2010,
    0x1001_0405_0410_2080,
    0x0221_6200_4840_1004,
    0x0400_2140_1044_0204,
    0x0100_0803_0400_2044,
    0x0040_181a_8120_2100,
    0x0030_0202_4400_0040,
    0x4010_0646_0220_8040,
    0x010a_0203_0441_0a00,
    0x0019_2108_0814_0040,
    0x0000_0100_8804_8011,
    0x1000_2810_20a8_0104,
    0x20f0_0010_0202_0000,
    0x0080_2014_102b_8300,
    0x1008_0218_0204_0050,
    0x8102_080e_0082_0000,
    0x0040_1308_0202_2002,
    0x0200_6024_0228_0401,
    0x8204_2a02_0044_1200,
    0x0002_0450_0041_1080,
    0x2000_0080_4025_0101,
    0x0000_0042_0204_0102,
    0x0000_1030_2608_0160,
    0x0010_200a_2082_0010,
];

pub(crate) const ROOK_SHIFTS: [u8; 64] = [
    52, 53, 53, 53, 53, 53, 53, 52, //
    53, 54, 54, 54, 54, 54, 54, 53, //
    53, 54, 54, 54, 54, 54, 54, 53, //
    53, 54, 54, 54, 54, 54, 54, 53, //
    53, 54, 54, 54, 54, 54, 54, 53, //
    53, 54, 54, 54, 54, 54, 54, 53, //
    53, 54, 54, 54, 54, 54, 54, 53, //
    52, 53, 53, 53, 53, 53, 53, 52, //
];

pub(crate) const BISHOP_SHIFTS: [u8; 64] = [
    58, 59, 59, 59, 59, 59, 59, 58, //
    59, 59, 59, 59, 59, 59, 59, 59, //
    59, 59, 57, 57, 57, 57, 59, 59, //
    59, 59, 57, 55, 55, 57, 59, 59, //
    59, 59, 57, 55, 55, 57, 59, 59, //
    59, 59, 57, 57, 57, 57, 59, 59, //
    59, 59, 59, 59, 59, 59, 59, 59, //
    58, 59, 59, 59, 59, 59, 59, 58, //
];
