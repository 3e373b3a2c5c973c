//! Jump polynomials: z^(2^128) reduced by each recurrence's minimal
//! polynomial, little-endian 64-bit limbs, low coefficient first.

pub(crate) static MT19937_JUMP_2P128: [u64; 313] = [
    0xb5709ec472de3963, 0xa823f8e588279bb6, 0x041f225926d83e59, 0x8b521777e7fdbb15,
    0xbf2812d548b5e756, 0x0b4849aae4b0adb9, 0xe96d39ce3e928b83, 0x09eaf2e8af6131d3,
    0xc1814c7b33548456, 0xfebd07bc893a7c83, 0x5147dcbf01bd8267, 0x9afef574e2a67de6,
    0xf0d3decab8334d09, 0xd884703b5561fd58, 0xb39b8f42ef5c803b, 0xd61cfed320dfb761,
    0x47416177cf5f3e5b, 0x8ea9cfab8e8442e9, 0x60ddf78d585d0ec0, 0xf0f7d60e2c9b8528,
    0xca3ee37db2bb3bfc, 0x870ed96981c9e659, 0xce5248519573a0de, 0x73cda5ed77683b94,
    0xf43b956c56bcfcbc, 0xbf04b4001f91de14, 0x1d8598319438c481, 0x9d97aed5ca6ae0a2,
    0xe75c95199e464218, 0xcd43455c253c5486, 0x7f8282d473b5ccd8, 0x192ddf99c8cacd44,
    0x5288b589d6be8546, 0x9819557fb4f26ca7, 0x03e73d28200570eb, 0x78a114c9264acc04,
    0x42eee89795f0fb7b, 0x67e751e8abcc80c2, 0x140e87ef1330cc85, 0xd3f8525e913b9a96,
    0x1ba1158f3ee3d205, 0x1f6aa87d2c4cdb89, 0x878b32239b5e9a3a, 0xa48c7778a498c3ed,
    0x1d08f055974ac066, 0xd6de80e9c8a08242, 0x2892ce4ca1cf0b40, 0x604168ae842731c7,
    0xbecff8b2dd23ee6d, 0xa4369751dfac7287, 0x4a5840d9ba8bc89d, 0xf53bdbeda7a58582,
    0xa4149d1ccfba4997, 0xf2c72905d5c66fc3, 0xae4d8e96ce68ad39, 0xc588f396f213a9b5,
    0x2c618d4e9d6116bb, 0xebfb61f3b34420d1, 0xcbdca6f23b702ed7, 0xbe2833957cb78166,
    0x20c0d09603a2436a, 0xbf49b815e190aa6f, 0x9b45b90349d78dc3, 0x67eb90e30aa4c4c8,
    0x7f5ceab1f32b13f0, 0x641eaedbccc48294, 0x80b553586d6aafb6, 0xf1fa779a72b55832,
    0x8992aefd3b60af74, 0x283594724fa609f2, 0x527dc1a961e7aaf1, 0xbcad693f834e8087,
    0x95171796c9ca3bf6, 0xb7d367759f41164a, 0x5c77677bcf20cf3b, 0x47dfd69ff4765b01,
    0xd708247fd90d6e15, 0xad7996285fe95113, 0xfcfb0ce2c627f9f2, 0x4b0033800f2441ce,
    0x50fa780b72161100, 0xb71ca8b71f72b11a, 0x5475baceffab42fd, 0x356eef7891c28b39,
    0xdc80086d1441c9c3, 0xb5c30ec996c47491, 0xa9321adda254e42d, 0xc30bee5b963a3612,
    0xdf141323635c75c7, 0x8926e38f38308f58, 0x897754d871b69592, 0x5bc061743cddde5e,
    0xbebb80a7ad520904, 0xd91d5d335cc284d4, 0x11090e418c6ba748, 0x462cffbc33bb9929,
    0xefc68605c42a508e, 0x230e6cd9602a3a14, 0x49b8eb3126c6f9f4, 0x7c49e7a451bd358f,
    0x1910bb3947b592cb, 0xad0ca5183ced6a5b, 0xd98ca57993461dcb, 0xecc5cb659526948e,
    0x0bddc87dfd1a431b, 0x7d9820ac5d694024, 0x716c1ae1ffeb5538, 0x04f8ed8613cffb2f,
    0x1b32eb97d777f039, 0x893da4ee87c1a95f, 0x965118d4c235f16c, 0xf99023e2e87994ba,
    0x891268a5bb8c4545, 0x4d163861e7cf46b4, 0xca688c0e0b2c5681, 0xb86346b536702e5f,
    0x72a6013755e311bb, 0x47d10e13142fdc5c, 0xac088c30a34ce0cb, 0x4d79a2e88f9503fe,
    0x02b4c095937670c7, 0x080533c020f8f5e0, 0xab1d0c2581fe8f32, 0xb601bb28048f776d,
    0xf8b8e16e96004a47, 0x4a9fa0426862af7b, 0x54384ad4b0b6f662, 0x81670a57a350c0ee,
    0x3a2c282026061dc1, 0xb9749667b575f899, 0xaa853838738dfc2a, 0xa53a92a400ccc442,
    0xbdc8cfa2cfaf5a3e, 0x529fee9d09884265, 0x966c709ea4d7f84f, 0xd14265d44c80bc42,
    0xb23c2aedf5ebe7f3, 0xb7d47c42804523f1, 0x73370568a7cb0aa9, 0x66158a1e06d90ac5,
    0xc4a3898c9805c7ad, 0x7fc536907890adde, 0xc5427e0885c39b20, 0x2fba05edc0c864f8,
    0x210ad2bfc365017a, 0x609ca0038ffb95ea, 0x84e663c48e6c4f72, 0x753c1ca83c110562,
    0x48642afc8700b723, 0xcef1123e14ac952c, 0xf075b8b8ed84973c, 0xf00a255a0ceac5c9,
    0x7e77e0dadfcd487c, 0x0071cb978be5750c, 0x28c4386f560827fe, 0xbf6b3ad6af4049f0,
    0x2e3006d1a911aadd, 0x2e8489f95eb5bb74, 0x84278164c36fb83d, 0x61e0e6be82302b47,
    0x11b59c560422260e, 0x9cd5ecaae4f20c9c, 0x9bc72523f866e2da, 0x816f533c52c41667,
    0xa0dbff9e47a3235e, 0xea9ca5a30c62a756, 0xc51267e9de0761a6, 0xf28b88663eed2af6,
    0xfd769663695ed01f, 0xbc47fcdf9065af4e, 0x424e389cdfca6259, 0xbb03335e166c2c1b,
    0xc4be33dd2a73a1a1, 0x45746bc2e690d058, 0x07d38d7f94b43407, 0x74b851e460854fb3,
    0xd99df507db3d2ac2, 0x5d6c254c86d3323b, 0xb4dd303282bfac22, 0xb7261a5fb27e023b,
    0x40f361bf34fe8179, 0xe716500e6c9e7858, 0x35c6ee0b65873b06, 0xe4c5d4fcfb2864e7,
    0x858ee284281901c6, 0x44803a65e5fca3cd, 0xf9f41e41f850f7f6, 0x87cbf3c965eb5539,
    0xae056412be2f8074, 0xd8fe916f3c5cb955, 0xd18ccb5eaec289df, 0x446157f20eef81bf,
    0xde9821754690364a, 0xd094591bc1597ea0, 0x79676e7ab1ed3e17, 0xa283bdf6c495ebc1,
    0x6a06b25c648c3570, 0x0deb138c398b0580, 0x4e3d096ae51108ed, 0xafde012b1dda7416,
    0xcb001892722f0317, 0x82d756d223875cf7, 0x2091ce44c99114de, 0x8a944ef9d24757b4,
    0xedf8f12b8594145a, 0xf30c0ce9998c4aff, 0xba657a589ce601a0, 0x94e6ec8d36a851dd,
    0x86ada470ed46b938, 0x46c714b9409b507d, 0xb628043e05c862a8, 0x8d763a8c7ac4a188,
    0x7f5ba7970adc18b6, 0x5db4bc6b69073599, 0x3d087e22444d59d3, 0x61466f51e9c04e89,
    0x151fd405548aa4e6, 0x6090566191555389, 0x3e3c85615e8d5619, 0x2491156c39c6b81c,
    0x17b4d42cfc2fd4a6, 0x2bd704cf82c9bcf9, 0x054032407b2568ec, 0x7e037b6b5d2268d9,
    0x231f10e7d86bec7a, 0x964f8501ba016830, 0x9873c321a3b7321f, 0xa5a250e1350ac2dd,
    0xc738d24726578385, 0xcd33873c012541ca, 0xd0cdc82cc5907f19, 0x5656cca45c2b540a,
    0xa3d987b81f887dd1, 0x06a2847883e7fe48, 0x465f2df8945682db, 0xfac8ffbc9b494ce1,
    0xb12ac825598f39cd, 0x3e5c217efa99231b, 0xe550fdba3b2d8ba2, 0x846a67338e510006,
    0xee48a9263e573194, 0x41c394c85ccd36bd, 0xa19b67f210a79620, 0x8a285c068b3fd2a6,
    0x3637050a3a1797d9, 0x7295647e63dfca07, 0xbe8e76017a7b3bba, 0x3c1e511aea660549,
    0x06c40c25c7a1931a, 0x7d1886643796cf70, 0xb9f70031ccd9fa38, 0x87fe9735601e2c75,
    0xef645dd6f8cd68b0, 0x535d71387d05b323, 0x90327a265c02f47f, 0xabd5ea2563ecd3b2,
    0x302c164101624325, 0x1cdfa6bcdbfbeb93, 0xb15987ed866519a2, 0x0c31ec84113296f1,
    0xb4132090232a35b2, 0x535172e392d0c3c5, 0xfc24a0a9095ffccb, 0x2546326e932c038e,
    0x1bbafc54ccc15e47, 0xa84866303cf2a838, 0x8405b4ae1057e025, 0x1eec4c73da36738d,
    0x4f9ff10488b30f90, 0x6eab7da885eea780, 0x6fe9593d40d9fdbe, 0x65606c0c3c850d3c,
    0x70308a34b078a231, 0x6d9a7cbe635af9bd, 0x63660519ed73ee32, 0x0e62955f1701dd8d,
    0x9cb66a13180db0e9, 0x78fb88aad3c2cd3e, 0xa2859c5285fdbe48, 0x902ffd419579f8f8,
    0x1f5e048a4b7c6a7b, 0x706d24958e262d89, 0x816d7f42ebbbd878, 0x3e6cc58a88cdfbf1,
    0xaa7dfafd754a64ab, 0xb63cd2f7e98d0a02, 0x72c5b57f38c8c85c, 0xe479da34b97f2b0a,
    0x7c86232a553e33f7, 0xedc6266db35cc8f8, 0x14b7f688ca67e7fe, 0xb3d3d66f072d997b,
    0x121005b9528c6a42, 0x87d31f390df2b622, 0xedaedb3712ce5fd4, 0x8e53ff2549dec2f4,
    0x764041aae79e435a, 0xb359bd5e29a3ee70, 0x303acd045aa2b047, 0x165795c2b82a2d07,
    0x950faac1a64ab733, 0xff195e03dfa2861f, 0x5eb360ec8cd6e865, 0x19e1a74d639cb063,
    0x775c20d67ec12528, 0x08722d7fa44c4ddf, 0x83d145bcb0c92d32, 0x73da60e43b2207e8,
    0x962813b9a13d0929, 0xeb6572d6738f420b, 0x80a4a0ef151a52ca, 0x0000000023eee457,
    0x0000000000000000,
];

pub(crate) static MT64_JUMP_2P128: [u64; 313] = [
    0x153fbc23409b1e30, 0xb8d58a2efc1cc7be, 0x04cc8df6bd5573e1, 0x8e1b99d6ea322754,
    0x7fa5c8ab11a78ecf, 0xa3f01992f879dc26, 0x77500e62929d74d1, 0x4c65ef439f2dcb2a,
    0x731b3bd3538eec46, 0x14cd564c40c9e3ae, 0x6ff65677752268b7, 0xbbea104c48ec8b8d,
    0x08d3565972568ea4, 0x5cb79db1f77395f2, 0x94f5c348a32cecac, 0x4b58cc38b6123ed7,
    0x64d191a00b3e362c, 0x7b051615bc105659, 0x2ad11e2d812e15d2, 0xd2551d15c944f218,
    0x68374254d1f46885, 0x72a5fd7700e8c34f, 0xe40b4ac61e14376c, 0xbb107cd0a9158cc0,
    0x5028a2a3d4ce28e6, 0xd0815eeb2e91aa05, 0x29ba386f6309e7dd, 0xa19bf128091df643,
    0xa4dda3ea5af247f8, 0x950ff2c8bc8d9f30, 0xc415a0871ef1af4e, 0xe8859d7a5ac3264c,
    0x4d58e6bed0739fe2, 0xb072d474e3f9602c, 0x93b112035cf0e33d, 0x90d4af56420a0a3d,
    0xcb930cdffd09ba87, 0x82305413c76ba04a, 0x88ed61ba7dfc9075, 0xdefc75a7869c145c,
    0x0c16916696775659, 0x94a47bf0b5d3869b, 0x026c4476e2551799, 0x2b22d90027fdd747,
    0xe447af7718644777, 0xbb83f1c03190e0fa, 0x932fabc717b3114c, 0xe0384041dbd5eafd,
    0x698ca9a2304fa895, 0xbbb26eff4e2f6627, 0x453cab967a470645, 0x2a6aefabcd19d4e9,
    0x808f8d33240f6b90, 0x91bf46c93a4b852b, 0x74b6a8597100e697, 0xbd2a4ef239564089,
    0x9917718e08ec24fa, 0xac9ce650dccc5d61, 0x52db4d76a2c5546c, 0x0123e0fc3cb90aea,
    0xfe78f1e83bb93635, 0x4f5b739d5ba04851, 0xa4bf7f96e9684a89, 0x5464bb377a97f62e,
    0x328933f006ce14be, 0x43e558b7d62ae5d7, 0xddb0f33f21e7d8dc, 0x52d2779de93320d2,
    0x57191c72acfc5093, 0x1779384819ca00e9, 0x7afcfbbe2acaa684, 0x90231d57884a7544,
    0xdd3ffead4feec6e3, 0x273584a42f1a795d, 0x691601338d2c7449, 0x8c8e419ca0529fc3,
    0x373e37dd051f8b86, 0x27a2d7161f6d06bd, 0x954240070472311a, 0x471565b60a93d2e4,
    0x4fb4ad962c328135, 0x7b1a3a92c401e93b, 0xf261c3fcc82af141, 0x57241af08978f3ec,
    0x2c79aaa370d1bd4f, 0xf35790a0978137d6, 0x38c7263c96234239, 0xe0a13a1dd5f852b5,
    0x0734f6c962f86802, 0xca52564f72f13f11, 0xa4bd2a9dc69a1248, 0x6f418a04edb45e98,
    0x764b57a0059aa71a, 0x926f6f5f354266df, 0x60c4150013cc9412, 0x3a14980c9d4ccd96,
    0x4e5da33944239d8b, 0x23f3ef6e843c729c, 0x389b1022de0ac7c9, 0x369b29d7d285823e,
    0xf556214ad63e2cd9, 0x90e43b9536bc15ab, 0xa43604007e23fd84, 0x70ee2bd8d9e6c2af,
    0x0e8b6c7a77fd426a, 0xed09417ce0d73cdf, 0xa3e935e2c81a4021, 0x7cf2e08b288398fa,
    0x1e933cde96a31115, 0xdb6014c3a780c561, 0x2bf15950b4660f9d, 0x50cf62efc80a3c55,
    0x448ede02ea0783c5, 0x97df0d14f64c01c7, 0x1353357d543368d0, 0x9bd1449652cdca9c,
    0x66d15aefa7a24321, 0x25dd75fc7492ba9d, 0x468ce9a1a3874e13, 0x40ab9e8ed67a4ad1,
    0x0bafb4d323d02677, 0xf9f3d01c1f435b69, 0x0c4a0fa46fac656a, 0xbdac3abdd37e4dfc,
    0xdf9b06ef05db31df, 0xed005f00f37daa7b, 0x924be2e465b09410, 0x99099376ea87be57,
    0x302d8a7c49c4be6a, 0xe8effc70541c07a5, 0x6e4611ad196a6ee3, 0xbd42cb15a52cb228,
    0xce343ee493cdec20, 0x7f4231e3d20e8e72, 0xa2127d2ed81e4f89, 0x27bb32afa1c6ef4c,
    0x9d37d9f4cb87c492, 0xa6b7e94b15e2287c, 0x098b4d302e16d6e9, 0x12d1da8ffbf3adb2,
    0xd5be155bc2fc01de, 0x90f630b9e309715b, 0xbdb108b0f8da213c, 0x98ed520d71f49d1a,
    0x82495aacd19eb9dc, 0x124d7478a15025b2, 0xa0eb607ec4087775, 0xcb47955eeabe0890,
    0x7360a3d0e0b68b89, 0x25f5bee656159d92, 0xeae8434e13f985ed, 0x04ff38722ad10a86,
    0xac7097215b434280, 0x3640ae9dd0687b1a, 0xb24209a4ce9f603b, 0xf03e6fd6f7a416dd,
    0xd31e5bcde48672af, 0x2704ce60eb8429a7, 0xf7aeb81f8fcd00c3, 0x5424dbaa0b636a3c,
    0xf352fe250d625a64, 0x9cc12556c2228f86, 0xedac0dbb94e94f51, 0xdd8f2b1f26762fd1,
    0x5ef488076c7e957f, 0x2b734dc8a46c3c61, 0x52111589eb2a22e3, 0xfa11c9bb843df4bc,
    0x5896ac2ecf36f9d2, 0x66c197a7e49dba0a, 0xe1eda2cd47aefd0f, 0x4cae0acf5d5fa62d,
    0xcb3e21e3f8d7c943, 0x351580d27b75fe44, 0x6cbd4b5618cbab9b, 0x8e47ef0542e8a51d,
    0x125adf6b4b59b2ef, 0x2729dc334cacfd5b, 0x883432a737937820, 0x60f002c1dceda4ab,
    0xafed1be46e7fd2bc, 0xf2a3d1ccbf871115, 0xf85e5c5050ae7160, 0x777cdc44554e6d74,
    0x0bcf75213e259946, 0x9d0714b4db9ca29a, 0x370fdc4067326a6d, 0xffeb713807a1cea8,
    0x7fb0a9674a53e792, 0x62b040005f9ce7bb, 0x8903f6b282b67cab, 0x3544ff158026eb52,
    0xd66590248adf92f1, 0x55de1c87a2ebdf48, 0x40b0382287267aba, 0x7dfa56a6fb26180e,
    0x45c32d7dc66b19ce, 0xf5ed0edf665034c7, 0xf4c7adbe75e15da0, 0x95db8535e0bd9122,
    0xc571b09620d82713, 0x9c21ed0e78f021f9, 0xd0cb50a9f9aa8def, 0xbcb3368c4e9ff5b6,
    0x06d8f649704939a3, 0x5eaa9ee186d14a54, 0x86d1f972fd4883d0, 0x63b1522f4d50d887,
    0x982b2fba1a9875a7, 0x7258bfd6235930ea, 0xe4ccc8e3c2f0f70e, 0x9bf390d119769362,
    0x1bcea29dbd2c02be, 0xd9c189db413398c0, 0x988aa44564f85434, 0x007ed1eaeef5e20a,
    0xa0685fede0eec596, 0xfef177e0b35a7f0e, 0x5006596f191ebc61, 0xcba87c3e61bdbc8a,
    0xff2174049069bfcb, 0xd7a536ddb2c4f33f, 0xf7aecde21fc2d977, 0xc121dca3feef7800,
    0xa90ad927d025c16b, 0x3ea6fee532058e96, 0x9f5210df30acdeb9, 0x520e94889837bcff,
    0x8c6c6a100dabdb5b, 0x6d2101f3fc530774, 0x51d535e6dc645e49, 0xe5e7620ed6a4941b,
    0xaf8023c107046243, 0x62e6e40f4ea19600, 0x466396ce1ab8e939, 0x470fc344d01a2a69,
    0x223011f816549f0e, 0x9b0a401733299c57, 0x6e214523ae60b334, 0x84c4cbe45a9b66a6,
    0x630d39f922b4c0b4, 0xfbfa79ec2c0e1012, 0xe9940485ec80d5c0, 0x1dc1c6fb5a01f32a,
    0x9cd0b7f3a578e57f, 0x40b6ce9d50e92c04, 0x588b8af39ab91d81, 0x8058dc2783b02de3,
    0xbb2103c504392c9d, 0x7264692220716211, 0xdb804fcdeb987bba, 0xababd32a49398687,
    0xe3dee3755b4da875, 0x16de733adb8bb721, 0x99476d13103ffe32, 0x86d2d629666cb05b,
    0x9c4e62ab740ce645, 0xb59682265b7519ff, 0x54df6930e9ed43fb, 0x33f8218861f98b68,
    0x21bc749542f06516, 0xd5e9662b4586df7f, 0x465569ea0eb5cce4, 0x36a484c938f0ae75,
    0xc088cc5189f80399, 0x4becd1a8a2280cde, 0x192f20a74dac06f0, 0xae766a8b287a1565,
    0x036c05ba6abff5f3, 0x5fe448493d8faf69, 0xa880a8ff94b90ea8, 0xd0ec7c6342d2b77b,
    0xd187d7068a2cf90f, 0x32523f9ad82e6693, 0x0f87420e87b90726, 0x3a745f953d8e0c35,
    0x0199993c5a3d1db4, 0x33e45b5766ccb1a0, 0xd2abaac1626e0b0c, 0xad5c3023b061fdfb,
    0xf67cf6541cb66e52, 0xe9d9083c635a2190, 0x29a103e0c3b4dac8, 0x75f72adb5e7a7e46,
    0xdcc943ab2ec296da, 0x396a079f137ff14b, 0x67853f3d29182ec1, 0x35dd3e7a7a71c780,
    0xfbf82a6fa275a546, 0x39cc58a7583f7227, 0x8b1b1aedefea9fed, 0x909f457dada71450,
    0xc02abfcbfe3e387a, 0xd6871e18b79ae3c1, 0x9f6bac46344f1a0f, 0x3366cd78201abced,
    0xa9da4a5207175299, 0x030642baf1ad5022, 0x5ae120669a844ab0, 0xd8fc12c876b5dbb7,
    0x2f92b413a6fc6e34, 0x2f2b5a6b0f30aff4, 0x89633b161fac757a, 0x5e4bf21ca2b399c2,
    0x5ed834f955dcf6ab, 0xd5fdc80d6fa8e6cd, 0xcdf09ed99544069f, 0xfa9adc855e53297c,
    0x38fa314d5c46ab53, 0x94508c05dda26a06, 0x7de2dae2aa415d2c, 0x0000000143ed6f2e,
    0x0000000000000000,
];

pub(crate) static SFMT_JUMP_2P128: [u64; 313] = [
    0xfbebcb506b0fce5c, 0x71dc3cd034ea6a50, 0x225ef99b2ffaca77, 0x0ae0fca8c2a2aae1,
    0x49f8e5a4b0d7169b, 0x6e563f0c0176b828, 0x40e602b18eb096b9, 0xe1cd310b4999a46f,
    0x497d3b281e5bf640, 0xaa2c1d37d10d3ddf, 0xc29ecc8934ec30aa, 0xf706a130c02de76c,
    0x48628b654ecd6acd, 0xc018a047fcb08c18, 0x8e50e349bacd37d5, 0x811f9d18f5efda2a,
    0xd9d3ebf77feec534, 0x10042e87371aab85, 0x536ed18178b04aef, 0x471ddd50c2434f86,
    0xdf4bcfc2541d716a, 0x8b7ec20849cd0fd1, 0x2d43dc8dec12f40c, 0x40717452bc5f1779,
    0xf74cca2cba8cfb2d, 0x6c655187f27f9d01, 0xa4d36c44f980a4e2, 0x791c70ef1453b7d2,
    0xaf18a2c87101db0c, 0xf205777cdd0d8887, 0x3e533fb3e221add8, 0x3830f77eb07e0f56,
    0xc9ba1c5ab5b0d2fb, 0x262680f95e88249d, 0x9e918238f8edb24c, 0xe8ff86d1667641af,
    0x862c6aa8c18dde3d, 0x1c02ba3cbfacb27a, 0xa52fba8899971bce, 0x2dbf39fb2624b9b6,
    0xe2072a6e61ef44fe, 0x8a85a8640f1d8b75, 0x33b81d57a2f47cc5, 0x07f820dfc74cfc37,
    0x9b178e2fe5a6e8ae, 0xeb3eff1df4f74b92, 0xf531c2c6ca98c4c9, 0xe55e9e0e8c014f1d,
    0xf84a3e00f19857a4, 0x2309f21e1b84a4a6, 0xe142205c2494e576, 0xdc6d308ef43b57d3,
    0xf4a2362bc90733e4, 0x61b75a1d49a7c24e, 0x9d7cb85e91d9a1f6, 0xa1842acb1fd04740,
    0xd353746d093f6e10, 0x4335ca77ab1cd81d, 0xd14f2f3147300e3e, 0x0fdbc1ddfce14933,
    0xce74ca80c3da4ebc, 0x361b723179044c30, 0xaf2d2af3fe2478a1, 0x25f6120ed3fa67e7,
    0xf729facfe0d44f7d, 0xf0196eda0a376b45, 0x5173f4fe9ad68bf7, 0x33313b9512dcf48d,
    0x2e672888e6fbdb17, 0x00552c0ee30b3e83, 0x7f795f6374198ea0, 0x9a31b1be4671c222,
    0x07e32b752604c744, 0x14cf67b6540b6757, 0x107f8e39002657a4, 0xc1221f768a089ca7,
    0x80c23041d9790be1, 0xc1b931d5fc679d83, 0x677711f90ba016a5, 0x0f7b650102b7612c,
    0x702c381d232642cc, 0x203cccf0d8dd83ea, 0xb2b6794bedcb430b, 0x7b261f2cf5cc4688,
    0x4df82dc9ee3f55b2, 0x6a3e85a4d360172f, 0xfbd15678465d8966, 0x6617bda383b531a7,
    0x18312593c6f881d1, 0xe2f14010db2b3cbd, 0xffc11567f9f693db, 0x6eedb3097987fe7c,
    0x4bbe145c391e680c, 0x000977d82d2acd10, 0x40656f8e04796d2a, 0x3c57102910b32c77,
    0xd4ecce0020514068, 0xb2f4f6bc6a0dfcc4, 0x16e4d2703a73ba2f, 0x76e2ee8337036533,
    0x762adc6ce38a6b76, 0x7604fa990e4991bb, 0x051ac1a14359d76d, 0x9699022e5bd6917f,
    0x9ad8d3a971234d3b, 0x9d583b7cb52817f3, 0x4a6aa03b188b4f06, 0x3b90ade2762a61fc,
    0xde77fcbc7de2aefe, 0xf5f95c571aa1f504, 0x9ab734a0cc45a916, 0x57e0ac5a140d8dc7,
    0xe2ee5d16c9e2b435, 0xe129672ef5490751, 0xd5089a3f9bd80381, 0x9b2d694f7f116897,
    0xc275d649e4be6b85, 0x02d238565916c174, 0xa1e9fee1eae28e0d, 0x80c052158c6c2742,
    0xedf1e855304d4eaa, 0xded8e5a423e993c9, 0x6adfa2944b75ac8e, 0x7653a8056990aec0,
    0xe9acb228e6e5a10a, 0x13c4350cb322ca8c, 0x10deacb4eae70de1, 0xb8b22bdbb0ab6773,
    0x708c134bc16b830c, 0xf934a4038f0e1029, 0xc6d4e05017d1cd8b, 0x352fed251a451b39,
    0xd6c33aed11a808da, 0x15b9cae0ca49c797, 0x0c2c18058bcc6908, 0xdc007e42623e98a2,
    0xafa29509be7afcc1, 0xa873a1f16f4d688f, 0xba5efd37dd92f44b, 0x21f6b9a13f8a32a7,
    0xfba158bd3d18c936, 0x956b16f06a83939f, 0xe93301ab682f184a, 0x24b85f58893f9040,
    0x3674840d98da552e, 0x242d79040a30e954, 0xf60294d3e95f4447, 0xe4a4f419676fe487,
    0xa50ba18853666b11, 0xbe087a9550200dcc, 0xfc46ead47999935d, 0x3b3d2ea658ee4cde,
    0xd51133d73304d5dc, 0x2f896ad70f6738ae, 0xd0d3028d68cd11c0, 0x70cefb379ea3fb21,
    0x9c4c1e1697332d00, 0xfa7549d0375bc844, 0xf4623f1031988d1b, 0x725f3bd590abc03d,
    0xb8ae503acf08c709, 0x872b2e0bdcda2ac9, 0x6b5ff7bcbe1a9381, 0x681107127fcfdd72,
    0xd9fa599eb2475e60, 0xd23f04689713f0e5, 0x6d73757cc83490e6, 0xc191aee0c5aad678,
    0xceb5b66d54ffeca6, 0xe1b8692b33871ade, 0x32c39a58f2164549, 0x63a75daee69a69c9,
    0x438ca1e166c500ad, 0xe3247b60b4275e72, 0x899917621db13799, 0x0141c2d9eb3ba71e,
    0x20ff72dc48c33520, 0x1cd585c5f907aec9, 0xb7a3669fd6bcb491, 0xf2cb59827acda6c1,
    0x9357925f9108fb24, 0xe69767b46e86d8d8, 0x301a29d1bbe78139, 0xecab8d78614d5c78,
    0x7dde3874095072fb, 0x5811fca4f256b1b1, 0xd970bdd12b144982, 0x1a86cfda3dad728e,
    0x23b4b9d05fe2a238, 0x4909de3dd7622934, 0x0ab8576034c244be, 0x5fb0106208625227,
    0x6b2ed4cd3652ec28, 0xf30093caa0b8c0da, 0x30521458374ce0b4, 0x0314d8ce07eb77a8,
    0xc75fea8d079e65c1, 0x5cde288f9160f31e, 0x55fda87184287d28, 0x98b8ea5120b66467,
    0xf78c3576b9fd59d9, 0xd32909a8de45a3cd, 0xac532173f98b88ec, 0xd8ee7376d0c4f0d1,
    0xb3c9aea4fe7f861b, 0xb33363269e9d60fd, 0xc3063c4fdb702ee7, 0x40a738098a40eb55,
    0xe19f3e6ce6e8a3f1, 0xe143e89040549a75, 0xc934d8066323a44c, 0x85c2f1f7d0485b0d,
    0x93466c873f653bf9, 0x2a050671b5ee79cd, 0x320b4bd2a318cb80, 0x5cfea310a8925cbd,
    0x1d9ff542c26d2976, 0xd819551ea35d8228, 0xdc5cc13116fcc6a0, 0x0a84be5454bed43f,
    0x66fa641b684e7b5f, 0x33a9e60caf657a99, 0x36400b5a449af8a1, 0xb2fb907a53604a12,
    0x2938d709d44ffbb9, 0x6c12d1ee809d0cd4, 0x829786844bdd0010, 0xd98ce865387067de,
    0x862135d770dbdf56, 0x4eeb4f314d625ac3, 0x237b458061a418e5, 0x595242a094ef38c9,
    0xf5174b23f58b3fbf, 0x52baf7d7379c4301, 0xd9199c09c4b92b4b, 0x4bbdfc1115c7738f,
    0x0d84ff764e9da6e3, 0x4b4a1317546ed58d, 0x9690d7ed3e96a6ac, 0x3f45add42ad5b9a1,
    0x99ccdd613c5f5cdf, 0x4300444fa8ecc248, 0xd2907eaf6326fb4f, 0x7392e8b088720a14,
    0xce25d799154674a1, 0x994171e803824cb9, 0xfecd9a7f800df92e, 0x77e4617e0bed440f,
    0x883f5fe274e842b4, 0x8274bfbfb17f7e39, 0x9b7fd1111ab3606e, 0xb6b5f88331318e87,
    0xe01858853ac1111c, 0xc35f8a9ecf6cc75d, 0xb638fe063cc04fc7, 0x47119791a739a37c,
    0x0cbc11a4ba1e2b66, 0xf1d5d21d1470c9eb, 0x8d9ce43d7f3337c7, 0x2427a4450f145437,
    0x06e64d2cee04a598, 0x2d7b6ca572b157d6, 0x4aeded211dc5bb80, 0x7160da431b83a256,
    0xa77e801248ab9b17, 0x772a562bf3d9410d, 0x787b5283809d077a, 0xd6ced38f1a03c8e6,
    0x7fdaebd16ad4ad45, 0xcf00e4d81d8a6e60, 0x452e3c16bc58991d, 0x4b700f1ab86afc93,
    0x6658ea2f1c97d4a3, 0x213e6ca0c0d0e813, 0xc61a8520672fa9df, 0x94ec350ce468e2c1,
    0x2aff9c0871e02507, 0xf355e308beebcf81, 0x8948b390ad66de92, 0x2d6bad9c030e02ac,
    0xc56cc864738412ba, 0xc719284d222221a3, 0x67f0b8e65eaa4fe2, 0xb9ea627e5cc79952,
    0xe17e321b111ba011, 0x3d1847482b0ab321, 0xa3168788655f6d42, 0x0b04ca32ef7aa22b,
    0x408308811c9d28c4, 0xc50d1d06b7d410aa, 0xfdedc44e70ff4db5, 0x8d6638373dbd8f90,
    0xabca271bd0641037, 0x0cb7de429abdcf11, 0x856de9ae4cbaebed, 0xb9b8f925d8cba21d,
    0xa649bd86970b637c, 0x14b9ab5d0e6a9c08, 0x4890b5760aaa2472, 0xba7ff00dc9505864,
    0x00644bd6de318880, 0x373c509f16f84d40, 0xcbb5ccb3637a322d, 0xb459ca117cb20d6b,
    0x9bbbd04cb7c496a0, 0x065c36e28205feee, 0x0278cf1b07a68788, 0x335a33c154399bea,
    0x548be2e67ec3073e, 0xb4d2c8ffc9016970, 0x67939d6dcd1e2f3a, 0x465b14aab769ca80,
    0x0000000000000000,
];

pub(crate) static DSFMT_JUMP_2P128: [u64; 313] = [
    0x9a56a2941176d56f, 0x325aa771d3c505a7, 0x1169127fcbe823aa, 0x42ec3bb1c48c299a,
    0xbcca1f58d2386be1, 0xbd9dd7b0db03d1d0, 0xcafd711866d83c07, 0xa1fdaa0e348eb673,
    0x59fc0754a9d4419c, 0x1c01fa593efb9754, 0x4af0ddedfd764608, 0xa587730686824a8d,
    0x0cb01c6957d28e57, 0x7156932987a07474, 0x08459f6087dd7af7, 0xd62be7afa2b140df,
    0xc6b679241f9f3f2f, 0x716d2b760cdc647f, 0x7b7bcfab1847618e, 0x58d1ad452799d2b8,
    0xb247fca57f290cd3, 0xa9019c16dd2b19a3, 0x5ca1b22ff099e9e1, 0x34cca1a7324e6b6f,
    0xe132d2415c41760a, 0x8e34a51d68d885fa, 0xd74983a52a31ee8d, 0xef2de3a00d72354b,
    0x912503b57be53110, 0x395e9eaa38e4b52c, 0x28b819de21915156, 0x277f2210c1a432fa,
    0x39a8138b0ce1b5ec, 0xdcf5265b042d9b8b, 0xb47acaac37cd5721, 0xa0e4ae45269c23d7,
    0x5480ff32060e3143, 0x1b135f09cc7c5ee3, 0x6c65b51d8adbc697, 0x0435ee76b78b07c8,
    0x9ff489b857a125e1, 0xf8ac8d7dac319e6e, 0x6bd6f184741eeb4d, 0x692b10f6b4095b22,
    0x0038c029c9312647, 0x6e6b62011b97caf2, 0x319141fe38c7ed1c, 0x7e1da08cd5927b74,
    0x8e23628105d0e7ac, 0x8c14e677221212b4, 0x20f8c52f028c6dc0, 0x4c3c1cd07b7a76a9,
    0xebddb15f84ac832e, 0x73dad788da575173, 0x928d1877dac3e0b7, 0x31e1c71a6fecd0d7,
    0x75c66f9ee8b0736a, 0xe03b9ad79926b2bd, 0xbace02e665d955e5, 0xe641522aa371b337,
    0xa97d6a82c8d47494, 0xad335d1c2ef7b3fd, 0x292c14e515532253, 0xffc1fb24eeb57d17,
    0x928b4c5c351719c1, 0x14f69c76824327e3, 0x847125810c911e78, 0xb379b4ce9e72ad3a,
    0x849d6dd6a3cd1cf3, 0x773dac19c8f85cfe, 0x090fc16627946b5b, 0xa742ff9ff18d9f80,
    0x24a5dc092420f236, 0x45348535ca272389, 0x12db989bdeaf2fec, 0xb6246f967a6f5a3a,
    0xec993e6d3f0103fe, 0xf1604e9bb108c3b5, 0x2d94cbdd701010b2, 0x68b365182c60b1bf,
    0xd7d457aaf01a2932, 0xbb4d32b83d2aa738, 0xf3f9ccac478f37a2, 0x86b9bd206909d89f,
    0x8a4d678dceca8cd1, 0x7b39f7c07957fa45, 0xd5fd198a3745e4cb, 0xc08b0e2cfc7f1788,
    0x109f1d9a55051c67, 0x69067d7fc23541cd, 0x5f4eea77bea3b7a8, 0xc0252318671d0514,
    0x257c296488b9df47, 0x78bb2b289bb51e01, 0x8e49a6ec27460f45, 0xba0d6346758bf2aa,
    0x50c656d4ba2d29e1, 0x533beb04d1da3754, 0xa65a3b7676113af1, 0xc23e8bffcf1efc5a,
    0xb43ca81c07fb6851, 0x10c368f58b4701dc, 0x985ccf21db7a8b3d, 0x6e4a5c4b686b67bc,
    0x30d8aa6f3b32aec1, 0x5638a8483f166058, 0x610c51fd2b0344fe, 0xe4971108b937bbc7,
    0xbb783e2d29501d70, 0x5fe1f07bc1fcd0ee, 0x5c7dd1c8479353e7, 0xa7c8bb4dc48bb2df,
    0xe11b3a234e940495, 0x815fd21c0462d9fd, 0x3e83ffc0bfb172de, 0x561a9d1cafac26ae,
    0xd133e66577e3afa6, 0xc845a793122e89a6, 0x2240bace0150fa16, 0x3f804134e9504aaf,
    0xf43ce0ddef6f92f1, 0x8c2bb5369c88b5a0, 0xdd5d0e5a53d00290, 0x346c47939b0776aa,
    0xb984f0496a188b76, 0x372dee91535b65c4, 0x8539259a7dfeabab, 0xa3c82df426870f4e,
    0x814f1b987f755dbd, 0x8beff70be6c9ff0e, 0xe5d3e7fd0c72663c, 0x9fb8de96eed48897,
    0xbf1af666091cdcc1, 0x169c9964fdbfd6da, 0x0ec03cb2b6f9318b, 0x5698c584326cd99a,
    0xe3c43afc12fdf5cb, 0x54bd2b6240222d48, 0x79415f8739f5c43a, 0x8f1b0b7e200586da,
    0x02f05dd847a838a0, 0x637772f4528a084e, 0x0d85ee20bfdb2483, 0x5c901998b28bcf6d,
    0x23694314e329aed9, 0xa1e495616c30ea2e, 0x8d81cb9e67d71f31, 0x3a22fbccda86aed6,
    0xacc8e2813a14e47c, 0x473f632831908389, 0xd2ec73c7c53407a5, 0xc8eb3b1cbd5d2dab,
    0xde9494833054fbe9, 0x3c6e630e07abe27e, 0x81311e9d8065cd38, 0xca9f08d0edc2aab9,
    0xa91026451617479d, 0xf7fb931d3b597c2d, 0x29b8a57c90d8aef9, 0xbc6d5b29510d5479,
    0x8e6d0227ee68945f, 0xcc6dd337f04c9694, 0x6ae279feac65dfb0, 0x6922f80064c5791a,
    0xa8e501e44853bfca, 0xaa7716850298b3b5, 0xce2f8a2260684195, 0xde23d1559bbeb6f8,
    0x5e262f48b56e0c6a, 0xb83052814c8614a6, 0xadf35257b84d26ef, 0xe056492f878353df,
    0xcb47460280150634, 0x50f90f5c161e60da, 0x49aa31bf74e5c3c3, 0x89998d173d1f079e,
    0x5f0dbb946b3a88ac, 0x89cdb7482673dde9, 0x8191df521fcb1e38, 0x07ad97a845b287c7,
    0xcae4e9e1ca875ddb, 0xe4de008e6cecb4ab, 0xc8f176700e8b9835, 0xf712d0a3668c469a,
    0x2bebe53ac80584ae, 0xfb000a565c88db11, 0xafe426e070f798db, 0xf547d80bb3c46b46,
    0x41266606d7a85fb8, 0xb7bf9bd9a5dbc578, 0xe722438cda56dd8b, 0xad4a2fd4f80ea4cd,
    0x8361b876dc7fb753, 0xc49a913c031ab160, 0x7901eb64a099f52d, 0xcb822c3de7f6a9fb,
    0xd7b513d3a66d23df, 0xb2f45d6e0ee37247, 0xb32d7fc81d48440a, 0x617dd3da1f562e33,
    0x229d5fec358962dc, 0xaaccf040dcdb1965, 0x97a36efad6cbed9b, 0x0855843867e3d3a2,
    0x97a3e1c3682037fc, 0xc8eaaf034eca76ae, 0x05eb24b93c690069, 0xf8faafcf19b14c42,
    0x399adfed2fa18286, 0xebb2084cbe21a5d4, 0x1759f23c59998f9e, 0xbf8aa97435cfec32,
    0xb420a442c04eb027, 0xa929168b534c8c1e, 0x792d02cb0caeb1a1, 0xdee68e8d29885d43,
    0x432e3147c0ccc591, 0x1710eeb19d273331, 0x2b8d530eef79dbac, 0xed030a3eef6ceb0b,
    0x55d8c766a4f7258b, 0x0c3db01818aa5563, 0xfc713ae92d67926a, 0x368509f0f31b0001,
    0x1b380ac0c59379de, 0x1e0f1c6fafd479dc, 0xfc1cb36b5011223f, 0xfdc0290e21ba7230,
    0x703b8f4a572303c8, 0xa3770b337fa29f41, 0xe16dada60769f099, 0x19ada2af38f9df4d,
    0x24ed537182296895, 0x869e40f038dce059, 0xb12527f2909e904d, 0x8e5bf88a7a053087,
    0x7bd50c49888c2eba, 0xc0cbcb7edb25f44b, 0xa8028d9af990ea13, 0x7429f11b00d0f04a,
    0x38ed91237bd49564, 0x18f9efdac3d0ac8f, 0xdb1c1914012cadcc, 0x439cc4b7aac5b204,
    0x8503b73812f66720, 0x4583679a18db61c7, 0xd3ae57e115359932, 0xbc5e8c85ddd60fb1,
    0xc349d9662b112dc5, 0xf6571ec99e508469, 0x5097991fee8fbb6d, 0x62f3418349208dbf,
    0x85e52882a82150a3, 0x37516e5330fadac1, 0xf8e0d1f6d8c714d7, 0xf8aadae7a3255c59,
    0xd10edbe3263752c3, 0x4bff90fcd06cd794, 0xd374bc695cba63d1, 0x577509082109b94c,
    0xd3874b1c46a79e0f, 0xaa9b7a7a130ceb34, 0x3f8e96272f51eaea, 0xd0c13a6fbe297e71,
    0xd7f5e707a6b315f1, 0x427cf4a904c6cce7, 0x086e43664238fcc1, 0x8ae31f35d6a95bf5,
    0xab3cd2554004bdf5, 0x54ef372e59d186ed, 0xa59ee531cd588e9f, 0x7ad9dc8ab4edc06a,
    0x2ba737db75c239c6, 0x51e004b7cc554b3f, 0x144d40c50f557aa0, 0xc8f9f6e221baced6,
    0xcb880a69d89c083a, 0x8118b8805713564b, 0x6b8c058f0dd01ad4, 0x9eee57928dec0db0,
    0x2b3339578a7ef8f6, 0x9d406a732ef6a718, 0xf68b1768a45fc2ee, 0x36a14ee6d8fd87fd,
    0xbfe4135126aef89b, 0xe0ec86e349a2d391, 0x70021fa1665f1cf6, 0x5a3459730d0f552a,
    0xe960dca129044352, 0xbdf220bcd8df3e3c, 0x603f3b7f319a2590, 0xf4d8f48efee5bc0d,
    0xc51bf072b15c8b45, 0x8b1af28e06e7931d, 0xaed4a8dfcd033d6a, 0x24513210d4e7af03,
    0x5131305adc1c5536, 0xd0fb95829ff1ad2c, 0x5aef06ca7733f69d, 0x192ae3bc91abd717,
    0xbe32e0a8f9492958, 0xc01479612cfcb299, 0x70d43812fa79281e, 0xe4f8f14bd25e9365,
    0x19e0a9577e73bd4b, 0x73d009dd01814fde, 0xf8ab5cf9a867ffe2, 0x67318b0340aa66cd,
    0x47c69d8d5d50b97b, 0x0871a88f3639f39f, 0xf71bfa78e0d9b2ee, 0x276511be3cf02577,
    0x00000000002b8ab3,
];

