//! Shipped ziggurat tables
//!
//! 256 layers per distribution. `k` holds the fast-accept thresholds in the
//! integer domain of the sampled magnitude, `w` the per-layer width scaled
//! by the magnitude's range, `f` the density at each layer boundary.
//!
//! These arrays are the reproducibility asset: regenerating them from the
//! recurrence in `table_gen` must agree to 1e-12 relative, and their exact
//! bit patterns are pinned by SHA-256 fingerprints in the tests. Never edit
//! them by hand.

/// Normal tail start (right edge of the base layer)
pub const RN: f64 = 3.654152885361009;

/// Exponential tail start (right edge of the base layer)
pub const RE: f64 = 7.69711747013105;

// Normal distribution, magnitudes scaled by 2^52.

pub static KN: [u64; 256] = [
    0xef33d8025bc39, 0x0, 0xc08be98f2acaa, 0xda354faba4236, 0xe51f67ec049b5, 0xeb255e9d2fa41,
    0xeef4b817e221c, 0xf19470af9cc80, 0xf37ed61ff712f, 0xf4f469560df95, 0xf61a5e41b6be3,
    0xf707a75536926, 0xf7cb2ec281ec3, 0xf86f10c6337d8, 0xf8fa657830a7d, 0xf9724c74db926,
    0xf9da907dbe051, 0xfa360f581e82e, 0xfa86fde5b3bbf, 0xfacf160d34659, 0xfb0fb6718ac00,
    0xfb49f8d5368f8, 0xfb7ec2366f3bd, 0xfbaece9a1db42, 0xfbdab9d0402f5, 0xfc03060ff6415,
    0xfc28210379aaa, 0xfc4a67ae254c2, 0xfc6a2977ae7a3, 0xfc87aa928908b, 0xfca325e4bd8d4,
    0xfcbcce9021dc6, 0xfcd4d12f834c6, 0xfceb54d8fe7e7, 0xfd007bf1dc4c6, 0xfd1464dd6c0ba,
    0xfd272a8e2f060, 0xfd38e4ff0c565, 0xfd49a9990b0f2, 0xfd598b8920bf9, 0xfd689c08e96bd,
    0xfd76ea9c8e52a, 0xfd848547b0606, 0xfd9178bad29cb, 0xfd9dd07a7ab31, 0xfda9970105c08,
    0xfdb4d5dc02bb8, 0xfdbf95c5bfa83, 0xfdc9debb99848, 0xfdd3b8118707f, 0xfddd288342d86,
    0xfde6364369d6f, 0xfdeee708d4f6d, 0xfdf7401a6b25e, 0xfdff46599eb80, 0xfe06fe4bc2343,
    0xfe0e6c225a0b8, 0xfe1593c28b6ba, 0xfe1c78cbc3e15, 0xfe231e9db1b32, 0xfe29885da1a27,
    0xfe2fb8fb54027, 0xfe35b33558bf6, 0xfe3b799cffee1, 0xfe410e99eac3f, 0xfe46746d475ff,
    0xfe4bad34c082f, 0xfe50baed29401, 0xfe559f74ebb5c, 0xfe5a5c8e410ff, 0xfe5ef3e13857d,
    0xfe6366fd90f74, 0xfe67b75c6d47c, 0xfe6be661e10b4, 0xfe6ff55e5f402, 0xfe73e5900a617,
    0xfe77b823e9d56, 0xfe7b6e3706fc3, 0xfe7f08d77416b, 0xfe8289053efb9, 0xfe85efb35166d,
    0xfe893dc84079b, 0xfe8c741f0cdf7, 0xfe8f9387d4e36, 0xfe929cc879a62, 0xfe95909d38833,
    0xfe986fb9399ee, 0xfe9b3ac7147b7, 0xfe9df2694b62a, 0xfea0973abe5d4, 0xfea329cf16600,
    0xfea5aab32948c, 0xfea81a6d5737c, 0xfeaa797de1c56, 0xfeacc85f3d889, 0xfeaf07865e5a9,
    0xfeb13762feb82, 0xfeb3585fe29bd, 0xfeb56ae316229, 0xfeb76f4e28470, 0xfeb965fe61f8d,
    0xfebb4f4cf9cf9, 0xfebd2b8f4494f, 0xfebefb16e2dbf, 0xfec0be31ebd6c, 0xfec2752b1599a,
    0xfec42049daf5b, 0xfec5bfd29f121, 0xfec75406cee81, 0xfec8dd2500c42, 0xfeca5b6911ea1,
    0xfecbcf0c42790, 0xfecd38454faa9, 0xfece97488c84a, 0xfecfec47f914f, 0xfed13773584c1,
    0xfed278f84489e, 0xfed3b10242ee8, 0xfed4dfbad580b, 0xfed605498c37c, 0xfed721d414f89,
    0xfed8357e4a924, 0xfed9406a42c6d, 0xfeda42b85b6a9, 0xfedb3c8746a5a, 0xfedc2df4165fa,
    0xfedd171a46dfc, 0xfeddf813c8a7d, 0xfeded0f90992c, 0xfedfa1e0fd3c1, 0xfee06ae124b73,
    0xfee12c0d959b5, 0xfee1e57900690, 0xfee29734b64d6, 0xfee34150ae46f, 0xfee3e3db89af0,
    0xfee47ee2982a8, 0xfee51271db03c, 0xfee59e9407ef7, 0xfee623528b3e5, 0xfee6a0b5897a9,
    0xfee716c3e0733, 0xfee7858327b3b, 0xfee7ecf7b0674, 0xfee84d2484a6e, 0xfee8a60b662ff,
    0xfee8f7accc80f, 0xfee94207e2598, 0xfee9851a829aa, 0xfee9c0e13481a, 0xfee9f557273b4,
    0xfeea22762cc70, 0xfeea4836b426d, 0xfeea668fc2d34, 0xfeea7d76ed6bd, 0xfeea8ce04f9ce,
    0xfeea94be83300, 0xfeea9502963d4, 0xfeea8d9c00723, 0xfeea7e789761a, 0xfeea678481cec,
    0xfeea48aa29e4a, 0xfeea21d22e4a2, 0xfee9f2e351fed, 0xfee9bbc26aef8, 0xfee97c524f2ad,
    0xfee93473c0a03, 0xfee8e405574e0, 0xfee88ae369c44, 0xfee828e7f3dc9, 0xfee7bdea7b854,
    0xfee749bff37cb, 0xfee6cc3a9bd2c, 0xfee64529e004d, 0xfee5b45a32857, 0xfee51994e5785,
    0xfee474a00069e, 0xfee3c53e12c1e, 0xfee30b2e02aa7, 0xfee2462ad81d4, 0xfee175eb83c2a,
    0xfee09a22a1417, 0xfedfb27e3499c, 0xfedebea76213e, 0xfeddbe422044f, 0xfedcb0ece39a5,
    0xfedb964042cc6, 0xfeda6dce9389c, 0xfed937237e95f, 0xfed7f1c38a80a, 0xfed69d2b9bffe,
    0xfed538d06add3, 0xfed3c41dea3f7, 0xfed23e76a2fac, 0xfed0a732fe617, 0xfecefda07fe08,
    0xfecd4100eb78c, 0xfecb708956e89, 0xfec98b6123096, 0xfec790a0da94e, 0xfec57f50f31d4,
    0xfec356686c938, 0xfec114cb4b30b, 0xfebeb948e6fa7, 0xfebc429a0b668, 0xfeb9af5ee0cb3,
    0xfeb6fe1c98519, 0xfeb42d3ad1f75, 0xfeb13b00b2d23, 0xfeae2591a02c0, 0xfeaaeae99222d,
    0xfea788d8ee2fe, 0xfea3fcffd73bc, 0xfea044c8dd9ce, 0xfe9c5d62f5612, 0xfe9843ba9477a,
    0xfe93f471d4700, 0xfe8f6bd76c5ad, 0xfe8aa5dc4e8bd, 0xfe859e07ab1c1, 0xfe804f690a917,
    0xfe7ab48823396, 0xfe74c751f6a7c, 0xfe6e8102aa1d9, 0xfe67da0b6abaf, 0xfe60c9f383055,
    0xfe5947338f718, 0xfe51470977256, 0xfe48bd436f42d, 0xfe3f9bffd1e0d, 0xfe35d35eeb171,
    0xfe2b5122fe4d2, 0xfe2000399552b, 0xfe13c827882e8, 0xfe068c4ee6783, 0xfdf82b02b717d,
    0xfde87c57efe7c, 0xfdd7509c63bce, 0xfdc46e529bee3, 0xfdaf8f82e0252, 0xfd985e1b2ba43,
    0xfd7e6ef48ced0, 0xfd613adbd64d6, 0xfd40149e2efda, 0xfd1a1a7b4c772, 0xfcee204761f61,
    0xfcba8d85e1171, 0xfc7d26ecd2cde, 0xfc32b2f1e22a1, 0xfbd6581c0b7e7, 0xfb606c40053d6,
    0xfac40582a2805, 0xf9e971e014510, 0xf89fa48a41d49, 0xf66c5f7f02f1a, 0xf1a5a4b331a0a,
];

pub static WN: [f64; 256] = [
    8.683627060828347e-16, 4.7793301741377593e-17, 6.354352416410258e-17, 7.454870480493524e-17,
    8.329366815173283e-17, 9.068060404526806e-17, 9.714860076096846e-17, 1.0294750313816509e-16,
    1.0823430288059529e-16, 1.131147019575026e-16, 1.1766359456688471e-16, 1.2193617278400444e-16,
    1.259743991434077e-16, 1.2981099885983e-16, 1.3347203736556521e-16, 1.3697864842315511e-16,
    1.4034823000997335e-16, 1.4359529451821483e-16, 1.4673208742137644e-16, 1.4976904668172175e-16,
    1.5271515003384589e-16, 1.555781816925582e-16, 1.58364940090921e-16, 1.6108140175081854e-16,
    1.6373285203782087e-16, 1.6632399058238027e-16, 1.6885901708498422e-16, 1.713417017638584e-16,
    1.7377544365695136e-16, 1.7616331922835133e-16, 1.785081231681451e-16, 1.8081240285640384e-16,
    1.8307848764671256e-16, 1.8530851388465636e-16, 1.8750444639224454e-16, 1.8966809700628152e-16,
    1.9180114064694707e-16, 1.9390512930483762e-16, 1.9598150426489938e-16, 1.9803160682991647e-16,
    2.0005668776139063e-16, 2.0205791561939557e-16, 2.04036384153502e-16, 2.0599311887275701e-16,
    2.0792908290287945e-16, 2.0984518222246143e-16, 2.117422703563793e-16, 2.136211525932919e-16,
    2.1548258978462456e-16, 2.1732730177446985e-16, 2.1915597050311459e-16, 2.2096924282121024e-16,
    2.227677330467673e-16, 2.2455202529302963e-16, 2.263226755917567e-16, 2.280802138334151e-16,
    2.298251455431733e-16, 2.3155795350934717e-16, 2.3327909927899507e-16, 2.349890245336731e-16,
    2.3668815235689126e-16, 2.3837688840352904e-16, 2.4005562198034833e-16, 2.417247270457588e-16,
    2.4338456313612944e-16, 2.45035476225179e-16, 2.4667779952231006e-16, 2.483118542151581e-16,
    2.499379501611042e-16, 2.5155638653203404e-16, 2.5316745241621325e-16, 2.547714273807808e-16,
    2.5636858199803476e-16, 2.579591783383904e-16, 2.595434704326291e-16, 2.6112170470582226e-16,
    2.626941203851009e-16, 2.6426094988325525e-16, 2.658224191599747e-16, 2.6737874806238796e-16,
    2.689301506464206e-16, 2.7047683548036584e-16, 2.7201900593194673e-16, 2.735568604400485e-16,
    2.7509059277220414e-16, 2.7662039226883326e-16, 2.781464440751553e-16, 2.796689293616304e-16,
    2.811880255337159e-16, 2.8270390643166804e-16, 2.8421674252106693e-16, 2.8572670107469254e-16,
    2.872339463463364e-16, 2.887386397370925e-16, 2.9024093995463437e-16, 2.917410031659504e-16,
    2.932389831439797e-16, 2.9473503140856054e-16, 2.9622929736207917e-16, 2.977219284201809e-16,
    2.9921307013788463e-16, 3.0070286633142165e-16, 3.0219145919609987e-16, 3.03678989420479e-16,
    3.051655962971257e-16, 3.066514178302042e-16, 3.0813659084014336e-16, 3.0962125106561073e-16,
    3.111055332630125e-16, 3.125895713037278e-16, 3.1407349826927714e-16, 3.1555744654461717e-16,
    3.1704154790974445e-16, 3.1852593362978663e-16, 3.200107345437515e-16, 3.214960811520994e-16,
    3.2298210370330056e-16, 3.2446893227953307e-16, 3.2595669688167537e-16, 3.2744552751374234e-16,
    3.2893555426691273e-16, 3.304269074032927e-16, 3.3191971743955903e-16, 3.3341411523062504e-16,
    3.349102320534696e-16, 3.364081996912721e-16, 3.379081505179944e-16, 3.394102175835522e-16,
    3.409145346997196e-16, 3.424212365269125e-16, 3.4393045866199745e-16, 3.4544233772727637e-16,
    3.4695701146079997e-16, 3.4847461880816654e-16, 3.4999530001596677e-16, 3.5151919672703956e-16,
    3.530464520777096e-16, 3.545772107971826e-16, 3.5611161930928127e-16, 3.5764982583671083e-16,
    3.5919198050805217e-16, 3.6073823546768767e-16, 3.62288744988875e-16, 3.638436655901936e-16,
    3.6540315615559934e-16, 3.669673780583357e-16, 3.6853649528896015e-16, 3.7011067458776174e-16,
    3.716900855818573e-16, 3.732749009272725e-16, 3.748652964563301e-16, 3.764614513306871e-16,
    3.7806354820038333e-16, 3.796717733692847e-16, 3.81286316967331e-16, 3.829073731300205e-16,
    3.8453514018559503e-16, 3.8616982085041696e-16, 3.8781162243306366e-16, 3.8946075704770047e-16,
    3.9111744183733125e-16, 3.9278189920756777e-16, 3.9445435707160414e-16, 3.961350491071328e-16,
    3.978242150259903e-16, 3.995221008573813e-16, 4.0122895924559053e-16, 4.0294504976316317e-16,
    4.0467063924060814e-16, 4.064060021137609e-16, 4.0815142079003244e-16, 4.099071860348679e-16,
    4.1167359737984646e-16, 4.134509635539701e-16, 4.1523960293981795e-16, 4.170398440563833e-16,
    4.1885202607056557e-16, 4.206764993394585e-16, 4.2251362598576456e-16, 4.243637805088701e-16,
    4.2622735043434475e-16, 4.281047370048792e-16, 4.299963559159534e-16, 4.3190263809983563e-16,
    4.338240305618544e-16, 4.3576099727326276e-16, 4.3771402012543917e-16, 4.396835999506351e-16,
    4.4167025761500585e-16, 4.4367453519024474e-16, 4.456969972107949e-16, 4.477382320243465e-16,
    4.497988532441506e-16, 4.51879501312604e-16, 4.53980845186604e-16, 4.561035841563454e-16,
    4.582484498105624e-16, 4.604162081627236e-16, 4.626076619543955e-16, 4.648236531539341e-16,
    4.67065065670879e-16, 4.693328283089513e-16, 4.716279179834561e-16, 4.739513632322101e-16,
    4.763042480529397e-16, 4.786877161045007e-16, 4.811029753143727e-16, 4.83551302940786e-16,
    4.860340511447171e-16, 4.885526531349988e-16, 4.911086299591681e-16, 4.937035980236772e-16,
    4.96339277440045e-16, 4.990175013088311e-16, 5.017402260714605e-16, 5.045095430815269e-16,
    5.07327691573011e-16, 5.101970732338156e-16, 5.131202686303404e-16, 5.161000557739877e-16,
    5.191394311754375e-16, 5.222416337996938e-16, 5.254101724174328e-16, 5.286488569501704e-16,
    5.319618345335188e-16, 5.353536311813313e-16, 5.388292001330899e-16, 5.423939782198587e-16,
    5.460539519071686e-16, 5.49815735088975e-16, 5.536866612464843e-16, 5.576748932923575e-16,
    5.617895553552448e-16, 5.660408920079487e-16, 5.704404621288487e-16, 5.750013768917029e-16,
    5.797385945721764e-16, 5.846692893452686e-16, 5.898133176475145e-16, 5.951938149638729e-16,
    6.008379696269235e-16, 6.067780409330819e-16, 6.130527208722697e-16, 6.19708989457909e-16,
    6.268046963298801e-16, 6.34412240712508e-16, 6.426239659545692e-16, 6.515603317342698e-16,
    6.613827885095446e-16, 6.723150462503459e-16, 6.846803417562237e-16, 6.989718336385731e-16,
    7.159994934828948e-16, 7.372424301797334e-16, 7.658936370804535e-16, 8.113849337656484e-16,
];

pub static FN: [f64; 256] = [
    1.0, 0.9771017012827313, 0.9598790918124159, 0.945198953453078, 0.9320600759689902,
    0.9199915050483602, 0.9087264400605629, 0.898095921906304, 0.8879846607633999,
    0.8783096558161468, 0.8690086880437932, 0.8600336212030086, 0.8513462584651237,
    0.8429156531184411, 0.8347162929929304, 0.8267268339520942, 0.8189291916094148,
    0.8113078743182199, 0.8038494831763895, 0.7965423304282546, 0.7893761435711986,
    0.7823418326598619, 0.7754313049861383, 0.7686373158033348, 0.7619533468415465,
    0.7553735065117545, 0.7488924472237267, 0.7425052963446362, 0.7362075981312667,
    0.7299952645658024, 0.7238645334728816, 0.7178119326349014, 0.7118342488823585,
    0.7059285013367974, 0.7000919181404901, 0.6943219161300326, 0.6886160830085271,
    0.6829721616487914, 0.6773880362225131, 0.6718617199007664, 0.6663913439123806,
    0.6609751477802414, 0.6556114705832247, 0.6502987431142946, 0.6450354808242519,
    0.639820277456439, 0.63465179929096, 0.6295287799281283, 0.6244500155502742, 0.6194143606090392,
    0.6144207238920768, 0.6094680649288954, 0.6045553907005495, 0.5996817526221677,
    0.5948462437709913, 0.590047996335792, 0.5852861792663003, 0.5805599961036835,
    0.5758686829752105, 0.571211506738075, 0.5665877632589518, 0.5619967758172779,
    0.5574378936214863, 0.5529104904285199, 0.5484139632579211, 0.5439477311926499,
    0.5395112342595446, 0.5351039323830196, 0.5307253044061939, 0.5263748471741867,
    0.5220520746747949, 0.5177565172322006, 0.513487720749743, 0.5092452459981361,
    0.5050286679458288, 0.5008375751284821, 0.4966715690547963, 0.49253026364614866,
    0.48841328470771206, 0.4843202694289116, 0.4802508659112497, 0.4762047327216838,
    0.47218153846988326, 0.46818096140782217, 0.46420268905027884, 0.4602464178149235,
    0.45631185268077357, 0.4523987068638825, 0.44850670150921407, 0.44463556539772775,
    0.4407850346677699, 0.4369548525499293, 0.43314476911457406, 0.4293545410313415,
    0.4255839313399006, 0.4218327092313533, 0.4181006498396846, 0.4143875340427068,
    0.4106931482719832, 0.40701728433124795, 0.4033597392228689, 0.39972031498193167,
    0.3960988185175471, 0.39249506146101076, 0.3889088600204646, 0.38534003484173396,
    0.38178841087503135, 0.3782538172472381, 0.3747360871394914, 0.37123505766982134,
    0.3677505697805962, 0.3642824681305496, 0.36083060099117575, 0.3573948201472905,
    0.35397498080156925, 0.3505709414828812, 0.3471825639582515, 0.34380971314829134,
    0.34045225704594545, 0.3371100666384128, 0.3337830158321085, 0.3304709813805371,
    0.3271738428149586, 0.323891482377732, 0.32062378495823013, 0.3173706380312224,
    0.31413193159763014, 0.3109075581275637, 0.30769741250555377, 0.3045013919778963,
    0.3013193961020341, 0.29815132669790134, 0.29499708780116257, 0.291856585618281,
    0.28872972848335393, 0.2856164268166581, 0.2825165930848494, 0.2794301417627653,
    0.27635698929678126, 0.2732970540696758, 0.27025025636696, 0.26721651834463184,
    0.26419576399831757, 0.2611879191337637, 0.258192911338648, 0.25521066995567715,
    0.25224112605694377, 0.2492842124195167, 0.24633986350223877, 0.243408015423712,
    0.2404886059414491, 0.23758157443217368, 0.2346868618732527, 0.23180441082524852,
    0.22893416541557748, 0.22607607132326488, 0.2232300757647896, 0.2203961274810116,
    0.21757417672517837, 0.2147641752520085, 0.21196607630785294, 0.20917983462193565,
    0.20640540639867933, 0.2036427493111215, 0.20089182249543133, 0.1981525865465381,
    0.1954250035148856, 0.1927090369043288, 0.19000465167119307, 0.18731181422451693,
    0.18463049242750454, 0.1819606556002165, 0.1793022745235304, 0.17665532144440665,
    0.17401977008249936, 0.17139559563815562, 0.16878277480185033, 0.16618128576511007,
    0.16359110823298295, 0.16101222343811766, 0.15844461415652022, 0.15588826472506456,
    0.15334316106083767, 0.15080929068241017, 0.14828664273312872, 0.14577520800653793,
    0.14327497897404712, 0.1407859498149683, 0.13830811644906432, 0.13584147657175735,
    0.13338602969216284, 0.13094177717412817, 0.12850872228047364, 0.12608687022065035,
    0.1236762282020514, 0.12127680548523544, 0.1188886134433457, 0.11651166562603701,
    0.11414597782825521, 0.11179156816424558, 0.10944845714721002, 0.10711666777507288,
    0.10479622562286706, 0.10248715894230627, 0.10018949876917202, 0.09790327903921563,
    0.09562853671335333, 0.09336531191302662, 0.09111364806670073, 0.08887359206859423,
    0.08664519445086778, 0.08442850957065466, 0.08222359581349568, 0.08003051581494751,
    0.07784933670237221, 0.07568013035919496, 0.07352297371424099, 0.07137794905914197,
    0.06924514439725027, 0.06712465382802399, 0.06501657797147044, 0.06292102443797785,
    0.060838108349751806, 0.058767952921137984, 0.05671069010639947, 0.054666461325077916,
    0.05263541827697365, 0.05061772386112179, 0.048613553216035145, 0.046623094902089664,
    0.044646552251446536, 0.04268414491661938, 0.04073611065607875, 0.03880270740465692,
    0.03688421568869115, 0.03498094146183307, 0.0330932194586887, 0.03122141719202369,
    0.02936593975823011, 0.027527235669693315, 0.025705804008632656, 0.023902203305873237,
    0.022117062707379922, 0.020351096230109354, 0.01860512127578335, 0.01688008315259584,
    0.015177088307982072, 0.013497450601780807, 0.011842757857943104, 0.0102149714397311,
    0.008616582769422917, 0.00705087547139211, 0.005522403299264754, 0.0040379725933718715,
    0.002609072746106363, 0.001260285930498598,
];

// Exponential distribution, magnitudes scaled by 2^53.

pub static KE: [u64; 256] = [
    0x1c5214272497c5, 0x0, 0x137d5bd79c3125, 0x186ef58e3f3bf1, 0x1a9bb7320eb09b, 0x1bd127f7194472,
    0x1c951d0f886513, 0x1d1bfe2d5c3970, 0x1d7e5bd56b18b2, 0x1dc934dd172c6e, 0x1e0409dfac9dc8,
    0x1e337b71d47835, 0x1e5a8b177cb7a0, 0x1e7b42096f046d, 0x1e970daf08ae3c, 0x1eaef5b14ef09e,
    0x1ec3bd07b46557, 0x1ed5f6f08799cd, 0x1ee614ae6e5689, 0x1ef46eca361ccf, 0x1f014b76ddd4a3,
    0x1f0ce313a796b6, 0x1f176369f1f779, 0x1f20f20c452571, 0x1f29ae1951a875, 0x1f31b18fb95533,
    0x1f39125157c107, 0x1f3fe2eb6e694c, 0x1f463332d788fb, 0x1f4c10bf1d3a11, 0x1f51874c5c3323,
    0x1f56a109c3ecc1, 0x1f5b66d9099995, 0x1f5fe08210d08c, 0x1f6414dd445772, 0x1f6809f685967a,
    0x1f6bc52a2b02e7, 0x1f6f4b3d32e4f4, 0x1f72a07190f139, 0x1f75c8974d09d9, 0x1f78c71b045cc0,
    0x1f7b9f12413ff5, 0x1f7e5346079f8a, 0x1f80e63be21138, 0x1f835a3dad9163, 0x1f85b16056b913,
    0x1f87ed89b24263, 0x1f8a10759374fc, 0x1f8c1bba3d39ad, 0x1f8e10cc45d04b, 0x1f8ff102013e16,
    0x1f91bd968358e2, 0x1f9377ac47afd7, 0x1f95204f8b64db, 0x1f96b878633894, 0x1f98410c968891,
    0x1f99bae146ba83, 0x1f9b26bc697f01, 0x1f9c85561b717a, 0x1f9dd759cfd804, 0x1f9f1d6761a1cf,
    0x1fa058140936c0, 0x1fa187eb3a333a, 0x1fa2ad6f6bc4fc, 0x1fa3c91ace0683, 0x1fa4db5fee6aa3,
    0x1fa5e4aa4d0980, 0x1fa6e55ee46783, 0x1fa7dddca51ec5, 0x1fa8ce7ce6a876, 0x1fa9b793ce5fef,
    0x1faa9970adb858, 0x1fab745e588233, 0x1fac48a3740585, 0x1fad1682bf9feb, 0x1fadde3b5782c0,
    0x1faea008f21d6c, 0x1faf5c2418b07f, 0x1fb012c25b7a15, 0x1fb0c41681dff3, 0x1fb17050b6f1fa,
    0x1fb2179eb2963b, 0x1fb2ba2bdfa84b, 0x1fb358217f4e19, 0x1fb3f1a6c9be0d, 0x1fb486e10cacd7,
    0x1fb517f3c793fc, 0x1fb5a500c5fdaa, 0x1fb62e2837fe5a, 0x1fb6b388c9010b, 0x1fb7353fb50798,
    0x1fb7b368dc7da9, 0x1fb82e1ed6ba0a, 0x1fb8a57b0347f6, 0x1fb919959a0f74, 0x1fb98a85ba7204,
    0x1fb9f861796f26, 0x1fba633deee287, 0x1fbacb2f41ec17, 0x1fbb3048b49146, 0x1fbb929caea4e4,
    0x1fbbf23cc8029d, 0x1fbc4f39d22996, 0x1fbca9a3e140d5, 0x1fbd018a548fa0, 0x1fbd56fbde729c,
    0x1fbdaa068bd66c, 0x1fbdfab7cb3f42, 0x1fbe491c7364de, 0x1fbe9540c96960, 0x1fbedf3086b129,
    0x1fbf26f6de6176, 0x1fbf6c9e828ae4, 0x1fbfb031a904c6, 0x1fbff1ba0ffdb1, 0x1fc03141024589,
    0x1fc06ecf5b54b3, 0x1fc0aa6d8b1428, 0x1fc0e42399698b, 0x1fc11bf9298a65, 0x1fc151f57d1944,
    0x1fc1861f770f4b, 0x1fc1b87d9e74b4, 0x1fc1e91620ea43, 0x1fc217eed505de, 0x1fc2450d3c8400,
    0x1fc27076864fc2, 0x1fc29a2f906310, 0x1fc2c23ce98045, 0x1fc2e8a2d2c6b5, 0x1fc30d654122ef,
    0x1fc33087de9c0f, 0x1fc3520e0b7ec9, 0x1fc371fadf66f8, 0x1fc390512a2887, 0x1fc3ad137497fa,
    0x1fc3c844013349, 0x1fc3e1e4ccab40, 0x1fc3f9f78e4da8, 0x1fc4107db85061, 0x1fc4257877fd69,
    0x1fc438e8b5bfc7, 0x1fc44acf15112a, 0x1fc45b2bf447e9, 0x1fc469ff6c4505, 0x1fc477495001b3,
    0x1fc483092bfbba, 0x1fc48d3e457ff7, 0x1fc495e799d21b, 0x1fc49d03dd30b2, 0x1fc4a29179b434,
    0x1fc4a68e8e07fc, 0x1fc4a8f8ebfb8d, 0x1fc4a9ce16eaa0, 0x1fc4a90b41fa35, 0x1fc4a6ad4e28a1,
    0x1fc4a2b0c82e76, 0x1fc49d11e62de3, 0x1fc495cc852df4, 0x1fc48cdc265ec1, 0x1fc4823bec237a,
    0x1fc475e696dee7, 0x1fc467d6817e83, 0x1fc458059dc038, 0x1fc4466d702e22, 0x1fc433070bcb9a,
    0x1fc41dcb0d6e0e, 0x1fc406b196bbf7, 0x1fc3edb248cb62, 0x1fc3d2c43e593d, 0x1fc3b5de0591b5,
    0x1fc396f599614b, 0x1fc376005a4592, 0x1fc352f3069372, 0x1fc32dc1b2281b, 0x1fc3065fbd7888,
    0x1fc2dcbfcbf264, 0x1fc2b0d3b99f9e, 0x1fc2828c8ffcf0, 0x1fc251da79f164, 0x1fc21eacb6d39e,
    0x1fc1e8f18c6757, 0x1fc1b09637bb3d, 0x1fc17586dccd11, 0x1fc137ae74d6b8, 0x1fc0f6f6bb2416,
    0x1fc0b348184da4, 0x1fc06c898baff1, 0x1fc022a092f365, 0x1fbfd5710f72b8, 0x1fbf84dd294890,
    0x1fbf30c52fc60d, 0x1fbed907770cc6, 0x1fbe7d80327ddc, 0x1fbe1e094ba615, 0x1fbdba7a354408,
    0x1fbd52a7b9f826, 0x1fbce663c6201b, 0x1fbc757d2c4de5, 0x1fbbffbf63b7aa, 0x1fbb84f23fe6a2,
    0x1fbb04d9a0d18e, 0x1fba7f351a70ad, 0x1fb9f3bf92b61a, 0x1fb9622ed4abfc, 0x1fb8ca33174a18,
    0x1fb82b76765b54, 0x1fb7859c5b895d, 0x1fb6d840d55594, 0x1fb622f7d96943, 0x1fb5654c6f37e2,
    0x1fb49ebfbf69d3, 0x1fb3cec803e747, 0x1fb2f4cf539c40, 0x1fb21032442854, 0x1fb1203e5a9605,
    0x1fb0243042e1c3, 0x1faf1b31c479a7, 0x1fae045767e106, 0x1facde9dbf2d73, 0x1faba8e640060b,
    0x1faa61f399ff29, 0x1fa908656f66a2, 0x1fa79ab3508d3d, 0x1fa61726d1f215, 0x1fa47bd48bea00,
    0x1fa2c693c5c095, 0x1fa0f4f47df316, 0x1f9f04336bbe0b, 0x1f9cf12b79f9bd, 0x1f9ab84415abc5,
    0x1f98555b782fb9, 0x1f95c3abd03f7a, 0x1f92fda9cef1f3, 0x1f8ffcda9ae41d, 0x1f8cb99e7385f8,
    0x1f892aec479608, 0x1f8545f904db90, 0x1f80fdc336039b, 0x1f7c427839e926, 0x1f7700a3582ace,
    0x1f71200f1a241d, 0x1f6a8234b7352c, 0x1f630000a8e267, 0x1f5a66904fe3c6, 0x1f50724ece1173,
    0x1f44c7665c6fdb, 0x1f36e5a38a59a4, 0x1f26143450340b, 0x1f113e047b0414, 0x1ef6aefa57cbe7,
    0x1ed38ca188151e, 0x1ea2a61e122db1, 0x1e5961c78b267d, 0x1dddf62bac0bb1, 0x1cdb4dd9e4e8c0,
];

pub static WE: [f64; 256] = [
    9.655740063209187e-16, 7.089014243955202e-18, 1.1639412496691068e-17, 1.5243915123532025e-17,
    1.8332848857237325e-17, 2.108965109464476e-17, 2.361128077843129e-17, 2.595595772310885e-17,
    2.816173554197743e-17, 3.025504130321374e-17, 3.2255082548363667e-17, 3.417632340185019e-17,
    3.602996978734446e-17, 3.7824907768696417e-17, 3.9568321980975465e-17, 4.1266117781759396e-17,
    4.292321808442518e-17, 4.4543777432823646e-17, 4.613133981483179e-17, 4.768895725264629e-17,
    4.9219280437279567e-17, 5.072462904503141e-17, 5.220704702792667e-17, 5.366834661718187e-17,
    5.511014372835089e-17, 5.653388673239661e-17, 5.79408800485276e-17, 5.933230365208937e-17,
    6.070922932847173e-17, 6.207263431163186e-17, 6.342341280303069e-17, 6.476238575956133e-17,
    6.609030925769398e-17, 6.740788167872715e-17, 6.871574991183805e-17, 7.001451473403922e-17,
    7.130473549660636e-17, 7.258693422414641e-17, 7.386159921381785e-17, 7.51291882072372e-17,
    7.639013119550817e-17, 7.764483290797841e-17, 7.889367502729783e-17, 8.013701816675448e-17,
    8.137520364041755e-17, 8.260855505210031e-17, 8.383737972539132e-17, 8.506196999385315e-17,
    8.628260436784104e-17, 8.749954859216174e-17, 8.871305660690245e-17, 8.992337142215348e-17,
    9.113072591597902e-17, 9.233534356381781e-17, 9.35374391064912e-17, 9.473721916312942e-17,
    9.593488279457989e-17, 9.713062202221511e-17, 9.832462230649502e-17, 9.951706298915062e-17,
    1.007081177024294e-16, 1.0189795474846932e-16, 1.0308673745154211e-16, 1.0427462448561878e-16,
    1.0546177017945757e-16, 1.0664832480119141e-16, 1.0783443482419476e-16, 1.0902024317583496e-16,
    1.1020588947055772e-16, 1.1139151022861965e-16, 1.1257723908165665e-16, 1.1376320696616837e-16,
    1.1494954230590083e-16, 1.1613637118402173e-16, 1.1732381750590448e-16, 1.1851200315326687e-16,
    1.1970104813034644e-16, 1.2089107070273848e-16, 1.2208218752947052e-16, 1.2327451378884145e-16,
    1.244681632985112e-16, 1.256632486302898e-16, 1.2685988122003973e-16, 1.2805817147307491e-16,
    1.292582288654119e-16, 1.3046016204120286e-16, 1.3166407890665723e-16, 1.328700867207381e-16,
    1.3407829218289992e-16, 1.3528880151811752e-16, 1.3650172055943978e-16, 1.377171548282881e-16,
    1.3893520961270637e-16, 1.4015599004375713e-16, 1.413796011702485e-16, 1.4260614803196652e-16,
    1.4383573573157902e-16, 1.4506846950536877e-16, 1.4630445479294757e-16, 1.4754379730609514e-16,
    1.4878660309686256e-16, 1.5003297862507367e-16, 1.5128303082535392e-16, 1.5253686717381255e-16,
    1.5379459575449967e-16, 1.5505632532575771e-16, 1.5632216538658375e-16, 1.5759222624311761e-16,
    1.5886661907536842e-16, 1.6014545600429167e-16, 1.6142885015932787e-16, 1.6271691574651303e-16,
    1.6400976811727177e-16, 1.6530752383800364e-16, 1.6661030076057416e-16, 1.6791821809382284e-16,
    1.692313964762022e-16, 1.7054995804966296e-16, 1.7187402653490314e-16, 1.732037273081008e-16,
    1.7453918747925335e-16, 1.758805359722491e-16, 1.772279036068006e-16, 1.7858142318237321e-16,
    1.7994122956424635e-16, 1.8130745977185013e-16, 1.826802530695252e-16, 1.8405975105985876e-16,
    1.8544609777975695e-16, 1.8683943979941927e-16, 1.8823992632438918e-16, 1.8964770930086165e-16,
    1.910629435244376e-16, 1.9248578675252436e-16, 1.9391639982058992e-16, 1.953549467624909e-16,
    1.9680159493510374e-16, 1.982565151475019e-16, 1.997198817949342e-16, 2.0119187299787347e-16,
    2.0267267074641983e-16, 2.0416246105035888e-16, 2.0566143409519179e-16, 2.071697844044737e-16,
    2.0868771100881597e-16, 2.1021541762192925e-16, 2.1175311282410757e-16, 2.1330101025357788e-16,
    2.148593288061663e-16, 2.1642829284376045e-16, 2.1800813241207835e-16, 2.1959908346828702e-16,
    2.2120138811904954e-16, 2.22815294869618e-16, 2.2444105888463076e-16, 2.2607894226131728e-16,
    2.27729214315862e-16, 2.2939215188373104e-16, 2.310680396348213e-16, 2.327571704043534e-16,
    2.3445984554049574e-16, 2.3617637526977735e-16, 2.379070790814276e-16, 2.396522861318623e-16,
    2.4141233567062923e-16, 2.431875774892255e-16, 2.4497837239430697e-16, 2.467850927069288e-16,
    2.486081227895851e-16, 2.504478596029556e-16, 2.523047132944216e-16, 2.5417910782058117e-16,
    2.560714816061771e-16, 2.579822882420531e-16, 2.5991199722497464e-16, 2.618610947423924e-16,
    2.6383008450549423e-16, 2.658194886341845e-16, 2.6782984859795257e-16, 2.6986172621694894e-16,
    2.719157047279819e-16, 2.7399238992058153e-16, 2.760924113487617e-16, 2.782164236246436e-16,
    2.8036510780069835e-16, 2.825391728480253e-16, 2.847393572388174e-16, 2.8696643064198177e-16,
    2.8922119574179956e-16, 2.9150449019052937e-16, 2.9381718870700286e-16, 2.9616020533454657e-16,
    2.9853449587300453e-16, 3.009410605012618e-16, 3.033809466085003e-16, 3.0585525185448604e-16,
    3.08365127481531e-16, 3.1091178190342663e-16, 3.1349648459966636e-16, 3.161205703467106e-16,
    3.1878544382197136e-16, 3.214925846206798e-16, 3.242435527309452e-16, 3.270399945182241e-16,
    3.2988364927722836e-16, 3.327763564171672e-16, 3.3572006335532446e-16, 3.387168342045505e-16,
    3.417688593525637e-16, 3.4487846604534244e-16, 3.4804813010374423e-16, 3.5128048892229794e-16,
    3.545783559224792e-16, 3.5794473666042765e-16, 3.6138284682190606e-16, 3.6489613237645425e-16,
    3.684882922095621e-16, 3.7216330360802073e-16, 3.759254510416256e-16, 3.7977935876688744e-16,
    3.8373002787892137e-16, 3.8778287856078953e-16, 3.919437984311429e-16, 3.962191980786775e-16,
    4.0061607510565417e-16, 4.051420882956573e-16, 4.0980564389030625e-16, 4.1461599642909046e-16,
    4.195833672073399e-16, 4.247190841824385e-16, 4.3003574816674707e-16, 4.355474314693952e-16,
    4.4126991690360704e-16, 4.472209874259932e-16, 4.534207798565834e-16, 4.598922204905932e-16,
    4.666615664711476e-16, 4.737590853262492e-16, 4.812199172829238e-16, 4.89085182739221e-16,
    4.97403423619194e-16, 5.06232507214416e-16, 5.156421828878083e-16, 5.257175802022275e-16,
    5.365640977112021e-16, 5.483144034258703e-16, 5.611387454675159e-16, 5.752606481503331e-16,
    5.909817641652101e-16, 6.087231416180907e-16, 6.290979034877556e-16, 6.53049205356404e-16,
    6.821393079028929e-16, 7.192444966089362e-16, 7.706095350032097e-16, 8.545517038584027e-16,
];

pub static FE: [f64; 256] = [
    1.0, 0.9381436808621765, 0.9004699299257477, 0.8717043323812047, 0.8477855006239905,
    0.8269932966430511, 0.808421651523009, 0.7915276369724963, 0.7759568520401162,
    0.7614633888498968, 0.7478686219851957, 0.735038092431424, 0.7228676595935725,
    0.7112747608050765, 0.7001926550827886, 0.6895664961170784, 0.6793505722647658,
    0.6695063167319252, 0.6600008410790001, 0.6508058334145714, 0.6418967164272664,
    0.6332519942143664, 0.6248527387036662, 0.6166821809152079, 0.6087253820796223,
    0.6009689663652326, 0.5934009016917338, 0.5860103184772684, 0.5787873586028454,
    0.5717230486648262, 0.5648091929124006, 0.5580382822625879, 0.5514034165406417,
    0.5448982376724401, 0.5385168720028622, 0.5322538802630437, 0.5261042139836201,
    0.5200631773682339, 0.5141263938147489, 0.5082897764106432, 0.5025495018413481,
    0.4969019872415499, 0.49134386959403287, 0.48587198734188525, 0.48048336393045454,
    0.4751751930373777, 0.4699448252839603, 0.4647897562504265, 0.459707615642138,
    0.45469615747461584, 0.44975325116275533, 0.44487687341454885, 0.4400651008423542,
    0.4353161032156369, 0.43062813728845917, 0.4259995411430347, 0.4214287289976169,
    0.41691418643300326, 0.4124544659971615, 0.40804818315203273, 0.4036940125305306,
    0.3993906844752314, 0.39513698183329043, 0.3909317369847974, 0.38677382908413793,
    0.38266218149601006, 0.37859575940958107, 0.37457356761590244, 0.3705946484351463,
    0.36665807978151443, 0.3627629733548181, 0.35890847294875006, 0.35509375286678774,
    0.3513180164374836, 0.34758049462163726, 0.3438804447045027, 0.34021714906678024,
    0.3365899140286778, 0.3329980687618092, 0.32944096426413655, 0.32591797239355635,
    0.3224284849560893, 0.31897191284495735, 0.315547685227129, 0.3121552487741797,
    0.30879406693456024, 0.3054636192445903, 0.3021634006756935, 0.2988929210155818,
    0.29565170428126125, 0.29243928816189263, 0.28925522348967775, 0.2860990737370769,
    0.2829704145387808, 0.2798688332369729, 0.2767939284485174, 0.27374530965280297,
    0.27072259679906, 0.26772541993204485, 0.26475341883506226, 0.26180624268936303,
    0.2588835497490163, 0.25598500703041543, 0.2531102900156295, 0.25025908236886235,
    0.24743107566532765, 0.24462596913189213, 0.24184346939887724, 0.23908329026244915,
    0.23634515245705962, 0.23362878343743335, 0.23093391716962744, 0.22826029393071676,
    0.22560766011668415, 0.22297576805812028, 0.22036437584335958, 0.21777324714870058,
    0.2152021510753787, 0.21265086199297834, 0.2101191593889883, 0.20760682772422212,
    0.20511365629383782, 0.2026394390937091, 0.20018397469191135, 0.19774706610509893,
    0.19532852067956327, 0.19292814997677138, 0.19054576966319545, 0.18818119940425432,
    0.18583426276219714, 0.1835047870977675, 0.18119260347549634, 0.17889754657247836,
    0.17661945459049494, 0.17435816917135352, 0.1721135353153201, 0.16988540130252766,
    0.1676736186172502, 0.165478041874936, 0.16329852875190182, 0.16113493991759203,
    0.1589871389693142, 0.15685499236936523, 0.15473836938446808, 0.15263714202744288,
    0.15055118500103992, 0.14848037564386682, 0.14642459387834497, 0.1443837221606348,
    0.14235764543247223, 0.1403462510748625, 0.1383494288635803, 0.13636707092642894,
    0.1343990717022137, 0.13244532790138763, 0.13050573846833088, 0.1285802045452283,
    0.12666862943751078, 0.12477091858083104, 0.12288697950954522, 0.1210167218266749,
    0.11916005717532775, 0.11731689921155564, 0.1154871635786336, 0.11367076788274438,
    0.11186763167005638, 0.11007767640518545, 0.10830082545103385, 0.10653700405000172,
    0.10478613930657024, 0.1030481601712578, 0.10132299742595369, 0.09961058367063715,
    0.09791085331149221, 0.09622374255043283, 0.09454918937605587, 0.09288713355604357,
    0.09123751663104017, 0.08960028191003284, 0.08797537446727019, 0.08636274114075689,
    0.0847623305323681, 0.08317409300963235, 0.08159798070923742, 0.0800339475423199,
    0.07848194920160644, 0.07694194317048052, 0.0754138887340584, 0.07389774699236475,
    0.07239348087570872, 0.07090105516237181, 0.06942043649872875, 0.06795159342193662,
    0.06649449638533979, 0.06504911778675376, 0.06361543199980735, 0.06219341540854101,
    0.06078304644547963, 0.05938430563342025, 0.05799717563120064, 0.05662164128374284,
    0.05525768967669701, 0.05390531019604605, 0.052564494593071664, 0.051235237055126254,
    0.04991753428270636, 0.04861138557337948, 0.04731679291318155, 0.04603376107617516,
    0.04476229773294327, 0.043502413568888176, 0.04225412241331624, 0.04101744138041482,
    0.03979239102337412, 0.03857899550307485, 0.03737728277295936, 0.03618728478193143,
    0.03500903769739742, 0.033842582150874344, 0.03268796350895954, 0.03154523217289361,
    0.030414443910466608, 0.029295660224637397, 0.028188948763978632, 0.0270943837809558,
    0.02601204664513422, 0.024942026419731787, 0.023884420511558174, 0.02283933540638524,
    0.021806887504283584, 0.020787204072578117, 0.01978042433800974, 0.018786700744696024,
    0.017806200410911355, 0.01683910682603994, 0.015885621839973156, 0.014945968011691148,
    0.014020391403181943, 0.013109164931254991, 0.012212592426255378, 0.0113310135978346,
    0.010464810181029982, 0.009614413642502213, 0.008780314985808977, 0.007963077438017043,
    0.007163353183634991, 0.006381905937319183, 0.005619642207205489, 0.0048776559835424,
    0.0041572951208338005, 0.003460264777836907, 0.0027887987935740783, 0.002145967743718907,
    0.0015362997803015728, 0.0009672692823271743, 0.0004541343538414966,
];
