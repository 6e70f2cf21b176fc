//! Static country table.
//!
//! ISO 3166-1 alpha-2 codes with English short names, ordered by name.
//! Kosovo uses the user-assigned code `XK` and has no flag emoji.

use super::Country;

pub(crate) static COUNTRIES: [Country; 250] = [
    Country::new("AF", "Afghanistan", Some("🇦🇫")),
    Country::new("AX", "Åland Islands", Some("🇦🇽")),
    Country::new("AL", "Albania", Some("🇦🇱")),
    Country::new("DZ", "Algeria", Some("🇩🇿")),
    Country::new("AS", "American Samoa", Some("🇦🇸")),
    Country::new("AD", "Andorra", Some("🇦🇩")),
    Country::new("AO", "Angola", Some("🇦🇴")),
    Country::new("AI", "Anguilla", Some("🇦🇮")),
    Country::new("AQ", "Antarctica", Some("🇦🇶")),
    Country::new("AG", "Antigua and Barbuda", Some("🇦🇬")),
    Country::new("AR", "Argentina", Some("🇦🇷")),
    Country::new("AM", "Armenia", Some("🇦🇲")),
    Country::new("AW", "Aruba", Some("🇦🇼")),
    Country::new("AU", "Australia", Some("🇦🇺")),
    Country::new("AT", "Austria", Some("🇦🇹")),
    Country::new("AZ", "Azerbaijan", Some("🇦🇿")),
    Country::new("BS", "Bahamas", Some("🇧🇸")),
    Country::new("BH", "Bahrain", Some("🇧🇭")),
    Country::new("BD", "Bangladesh", Some("🇧🇩")),
    Country::new("BB", "Barbados", Some("🇧🇧")),
    Country::new("BY", "Belarus", Some("🇧🇾")),
    Country::new("BE", "Belgium", Some("🇧🇪")),
    Country::new("BZ", "Belize", Some("🇧🇿")),
    Country::new("BJ", "Benin", Some("🇧🇯")),
    Country::new("BM", "Bermuda", Some("🇧🇲")),
    Country::new("BT", "Bhutan", Some("🇧🇹")),
    Country::new("BO", "Bolivia", Some("🇧🇴")),
    Country::new("BQ", "Bonaire, Sint Eustatius and Saba", Some("🇧🇶")),
    Country::new("BA", "Bosnia and Herzegovina", Some("🇧🇦")),
    Country::new("BW", "Botswana", Some("🇧🇼")),
    Country::new("BV", "Bouvet Island", Some("🇧🇻")),
    Country::new("BR", "Brazil", Some("🇧🇷")),
    Country::new("IO", "British Indian Ocean Territory", Some("🇮🇴")),
    Country::new("BN", "Brunei", Some("🇧🇳")),
    Country::new("BG", "Bulgaria", Some("🇧🇬")),
    Country::new("BF", "Burkina Faso", Some("🇧🇫")),
    Country::new("BI", "Burundi", Some("🇧🇮")),
    Country::new("CV", "Cabo Verde", Some("🇨🇻")),
    Country::new("KH", "Cambodia", Some("🇰🇭")),
    Country::new("CM", "Cameroon", Some("🇨🇲")),
    Country::new("CA", "Canada", Some("🇨🇦")),
    Country::new("KY", "Cayman Islands", Some("🇰🇾")),
    Country::new("CF", "Central African Republic", Some("🇨🇫")),
    Country::new("TD", "Chad", Some("🇹🇩")),
    Country::new("CL", "Chile", Some("🇨🇱")),
    Country::new("CN", "China", Some("🇨🇳")),
    Country::new("CX", "Christmas Island", Some("🇨🇽")),
    Country::new("CC", "Cocos (Keeling) Islands", Some("🇨🇨")),
    Country::new("CO", "Colombia", Some("🇨🇴")),
    Country::new("KM", "Comoros", Some("🇰🇲")),
    Country::new("CG", "Congo", Some("🇨🇬")),
    Country::new("CD", "Congo, Democratic Republic of the", Some("🇨🇩")),
    Country::new("CK", "Cook Islands", Some("🇨🇰")),
    Country::new("CR", "Costa Rica", Some("🇨🇷")),
    Country::new("CI", "Côte d'Ivoire", Some("🇨🇮")),
    Country::new("HR", "Croatia", Some("🇭🇷")),
    Country::new("CU", "Cuba", Some("🇨🇺")),
    Country::new("CW", "Curaçao", Some("🇨🇼")),
    Country::new("CY", "Cyprus", Some("🇨🇾")),
    Country::new("CZ", "Czech Republic", Some("🇨🇿")),
    Country::new("DK", "Denmark", Some("🇩🇰")),
    Country::new("DJ", "Djibouti", Some("🇩🇯")),
    Country::new("DM", "Dominica", Some("🇩🇲")),
    Country::new("DO", "Dominican Republic", Some("🇩🇴")),
    Country::new("EC", "Ecuador", Some("🇪🇨")),
    Country::new("EG", "Egypt", Some("🇪🇬")),
    Country::new("SV", "El Salvador", Some("🇸🇻")),
    Country::new("GQ", "Equatorial Guinea", Some("🇬🇶")),
    Country::new("ER", "Eritrea", Some("🇪🇷")),
    Country::new("EE", "Estonia", Some("🇪🇪")),
    Country::new("SZ", "Eswatini", Some("🇸🇿")),
    Country::new("ET", "Ethiopia", Some("🇪🇹")),
    Country::new("FK", "Falkland Islands", Some("🇫🇰")),
    Country::new("FO", "Faroe Islands", Some("🇫🇴")),
    Country::new("FJ", "Fiji", Some("🇫🇯")),
    Country::new("FI", "Finland", Some("🇫🇮")),
    Country::new("FR", "France", Some("🇫🇷")),
    Country::new("GF", "French Guiana", Some("🇬🇫")),
    Country::new("PF", "French Polynesia", Some("🇵🇫")),
    Country::new("TF", "French Southern Territories", Some("🇹🇫")),
    Country::new("GA", "Gabon", Some("🇬🇦")),
    Country::new("GM", "Gambia", Some("🇬🇲")),
    Country::new("GE", "Georgia", Some("🇬🇪")),
    Country::new("DE", "Germany", Some("🇩🇪")),
    Country::new("GH", "Ghana", Some("🇬🇭")),
    Country::new("GI", "Gibraltar", Some("🇬🇮")),
    Country::new("GR", "Greece", Some("🇬🇷")),
    Country::new("GL", "Greenland", Some("🇬🇱")),
    Country::new("GD", "Grenada", Some("🇬🇩")),
    Country::new("GP", "Guadeloupe", Some("🇬🇵")),
    Country::new("GU", "Guam", Some("🇬🇺")),
    Country::new("GT", "Guatemala", Some("🇬🇹")),
    Country::new("GG", "Guernsey", Some("🇬🇬")),
    Country::new("GN", "Guinea", Some("🇬🇳")),
    Country::new("GW", "Guinea-Bissau", Some("🇬🇼")),
    Country::new("GY", "Guyana", Some("🇬🇾")),
    Country::new("HT", "Haiti", Some("🇭🇹")),
    Country::new("HM", "Heard Island and McDonald Islands", Some("🇭🇲")),
    Country::new("VA", "Holy See", Some("🇻🇦")),
    Country::new("HN", "Honduras", Some("🇭🇳")),
    Country::new("HK", "Hong Kong", Some("🇭🇰")),
    Country::new("HU", "Hungary", Some("🇭🇺")),
    Country::new("IS", "Iceland", Some("🇮🇸")),
    Country::new("IN", "India", Some("🇮🇳")),
    Country::new("ID", "Indonesia", Some("🇮🇩")),
    Country::new("IR", "Iran", Some("🇮🇷")),
    Country::new("IQ", "Iraq", Some("🇮🇶")),
    Country::new("IE", "Ireland", Some("🇮🇪")),
    Country::new("IM", "Isle of Man", Some("🇮🇲")),
    Country::new("IL", "Israel", Some("🇮🇱")),
    Country::new("IT", "Italy", Some("🇮🇹")),
    Country::new("JM", "Jamaica", Some("🇯🇲")),
    Country::new("JP", "Japan", Some("🇯🇵")),
    Country::new("JE", "Jersey", Some("🇯🇪")),
    Country::new("JO", "Jordan", Some("🇯🇴")),
    Country::new("KZ", "Kazakhstan", Some("🇰🇿")),
    Country::new("KE", "Kenya", Some("🇰🇪")),
    Country::new("KI", "Kiribati", Some("🇰🇮")),
    Country::new("KP", "Korea, North", Some("🇰🇵")),
    Country::new("KR", "Korea, South", Some("🇰🇷")),
    Country::new("XK", "Kosovo", None),
    Country::new("KW", "Kuwait", Some("🇰🇼")),
    Country::new("KG", "Kyrgyzstan", Some("🇰🇬")),
    Country::new("LA", "Laos", Some("🇱🇦")),
    Country::new("LV", "Latvia", Some("🇱🇻")),
    Country::new("LB", "Lebanon", Some("🇱🇧")),
    Country::new("LS", "Lesotho", Some("🇱🇸")),
    Country::new("LR", "Liberia", Some("🇱🇷")),
    Country::new("LY", "Libya", Some("🇱🇾")),
    Country::new("LI", "Liechtenstein", Some("🇱🇮")),
    Country::new("LT", "Lithuania", Some("🇱🇹")),
    Country::new("LU", "Luxembourg", Some("🇱🇺")),
    Country::new("MO", "Macao", Some("🇲🇴")),
    Country::new("MG", "Madagascar", Some("🇲🇬")),
    Country::new("MW", "Malawi", Some("🇲🇼")),
    Country::new("MY", "Malaysia", Some("🇲🇾")),
    Country::new("MV", "Maldives", Some("🇲🇻")),
    Country::new("ML", "Mali", Some("🇲🇱")),
    Country::new("MT", "Malta", Some("🇲🇹")),
    Country::new("MH", "Marshall Islands", Some("🇲🇭")),
    Country::new("MQ", "Martinique", Some("🇲🇶")),
    Country::new("MR", "Mauritania", Some("🇲🇷")),
    Country::new("MU", "Mauritius", Some("🇲🇺")),
    Country::new("YT", "Mayotte", Some("🇾🇹")),
    Country::new("MX", "Mexico", Some("🇲🇽")),
    Country::new("FM", "Micronesia", Some("🇫🇲")),
    Country::new("MD", "Moldova", Some("🇲🇩")),
    Country::new("MC", "Monaco", Some("🇲🇨")),
    Country::new("MN", "Mongolia", Some("🇲🇳")),
    Country::new("ME", "Montenegro", Some("🇲🇪")),
    Country::new("MS", "Montserrat", Some("🇲🇸")),
    Country::new("MA", "Morocco", Some("🇲🇦")),
    Country::new("MZ", "Mozambique", Some("🇲🇿")),
    Country::new("MM", "Myanmar", Some("🇲🇲")),
    Country::new("NA", "Namibia", Some("🇳🇦")),
    Country::new("NR", "Nauru", Some("🇳🇷")),
    Country::new("NP", "Nepal", Some("🇳🇵")),
    Country::new("NL", "Netherlands", Some("🇳🇱")),
    Country::new("NC", "New Caledonia", Some("🇳🇨")),
    Country::new("NZ", "New Zealand", Some("🇳🇿")),
    Country::new("NI", "Nicaragua", Some("🇳🇮")),
    Country::new("NE", "Niger", Some("🇳🇪")),
    Country::new("NG", "Nigeria", Some("🇳🇬")),
    Country::new("NU", "Niue", Some("🇳🇺")),
    Country::new("NF", "Norfolk Island", Some("🇳🇫")),
    Country::new("MK", "North Macedonia", Some("🇲🇰")),
    Country::new("MP", "Northern Mariana Islands", Some("🇲🇵")),
    Country::new("NO", "Norway", Some("🇳🇴")),
    Country::new("OM", "Oman", Some("🇴🇲")),
    Country::new("PK", "Pakistan", Some("🇵🇰")),
    Country::new("PW", "Palau", Some("🇵🇼")),
    Country::new("PS", "Palestine", Some("🇵🇸")),
    Country::new("PA", "Panama", Some("🇵🇦")),
    Country::new("PG", "Papua New Guinea", Some("🇵🇬")),
    Country::new("PY", "Paraguay", Some("🇵🇾")),
    Country::new("PE", "Peru", Some("🇵🇪")),
    Country::new("PH", "Philippines", Some("🇵🇭")),
    Country::new("PN", "Pitcairn", Some("🇵🇳")),
    Country::new("PL", "Poland", Some("🇵🇱")),
    Country::new("PT", "Portugal", Some("🇵🇹")),
    Country::new("PR", "Puerto Rico", Some("🇵🇷")),
    Country::new("QA", "Qatar", Some("🇶🇦")),
    Country::new("RE", "Réunion", Some("🇷🇪")),
    Country::new("RO", "Romania", Some("🇷🇴")),
    Country::new("RU", "Russia", Some("🇷🇺")),
    Country::new("RW", "Rwanda", Some("🇷🇼")),
    Country::new("BL", "Saint Barthélemy", Some("🇧🇱")),
    Country::new("SH", "Saint Helena, Ascension and Tristan da Cunha", Some("🇸🇭")),
    Country::new("KN", "Saint Kitts and Nevis", Some("🇰🇳")),
    Country::new("LC", "Saint Lucia", Some("🇱🇨")),
    Country::new("MF", "Saint Martin", Some("🇲🇫")),
    Country::new("PM", "Saint Pierre and Miquelon", Some("🇵🇲")),
    Country::new("VC", "Saint Vincent and the Grenadines", Some("🇻🇨")),
    Country::new("WS", "Samoa", Some("🇼🇸")),
    Country::new("SM", "San Marino", Some("🇸🇲")),
    Country::new("ST", "Sao Tome and Principe", Some("🇸🇹")),
    Country::new("SA", "Saudi Arabia", Some("🇸🇦")),
    Country::new("SN", "Senegal", Some("🇸🇳")),
    Country::new("RS", "Serbia", Some("🇷🇸")),
    Country::new("SC", "Seychelles", Some("🇸🇨")),
    Country::new("SL", "Sierra Leone", Some("🇸🇱")),
    Country::new("SG", "Singapore", Some("🇸🇬")),
    Country::new("SX", "Sint Maarten", Some("🇸🇽")),
    Country::new("SK", "Slovakia", Some("🇸🇰")),
    Country::new("SI", "Slovenia", Some("🇸🇮")),
    Country::new("SB", "Solomon Islands", Some("🇸🇧")),
    Country::new("SO", "Somalia", Some("🇸🇴")),
    Country::new("ZA", "South Africa", Some("🇿🇦")),
    Country::new("GS", "South Georgia and the South Sandwich Islands", Some("🇬🇸")),
    Country::new("SS", "South Sudan", Some("🇸🇸")),
    Country::new("ES", "Spain", Some("🇪🇸")),
    Country::new("LK", "Sri Lanka", Some("🇱🇰")),
    Country::new("SD", "Sudan", Some("🇸🇩")),
    Country::new("SR", "Suriname", Some("🇸🇷")),
    Country::new("SJ", "Svalbard and Jan Mayen", Some("🇸🇯")),
    Country::new("SE", "Sweden", Some("🇸🇪")),
    Country::new("CH", "Switzerland", Some("🇨🇭")),
    Country::new("SY", "Syria", Some("🇸🇾")),
    Country::new("TW", "Taiwan", Some("🇹🇼")),
    Country::new("TJ", "Tajikistan", Some("🇹🇯")),
    Country::new("TZ", "Tanzania", Some("🇹🇿")),
    Country::new("TH", "Thailand", Some("🇹🇭")),
    Country::new("TL", "Timor-Leste", Some("🇹🇱")),
    Country::new("TG", "Togo", Some("🇹🇬")),
    Country::new("TK", "Tokelau", Some("🇹🇰")),
    Country::new("TO", "Tonga", Some("🇹🇴")),
    Country::new("TT", "Trinidad and Tobago", Some("🇹🇹")),
    Country::new("TN", "Tunisia", Some("🇹🇳")),
    Country::new("TR", "Turkey", Some("🇹🇷")),
    Country::new("TM", "Turkmenistan", Some("🇹🇲")),
    Country::new("TC", "Turks and Caicos Islands", Some("🇹🇨")),
    Country::new("TV", "Tuvalu", Some("🇹🇻")),
    Country::new("UG", "Uganda", Some("🇺🇬")),
    Country::new("UA", "Ukraine", Some("🇺🇦")),
    Country::new("AE", "United Arab Emirates", Some("🇦🇪")),
    Country::new("GB", "United Kingdom", Some("🇬🇧")),
    Country::new("US", "United States", Some("🇺🇸")),
    Country::new("UM", "United States Minor Outlying Islands", Some("🇺🇲")),
    Country::new("UY", "Uruguay", Some("🇺🇾")),
    Country::new("UZ", "Uzbekistan", Some("🇺🇿")),
    Country::new("VU", "Vanuatu", Some("🇻🇺")),
    Country::new("VE", "Venezuela", Some("🇻🇪")),
    Country::new("VN", "Vietnam", Some("🇻🇳")),
    Country::new("VG", "Virgin Islands (British)", Some("🇻🇬")),
    Country::new("VI", "Virgin Islands (U.S.)", Some("🇻🇮")),
    Country::new("WF", "Wallis and Futuna", Some("🇼🇫")),
    Country::new("EH", "Western Sahara", Some("🇪🇭")),
    Country::new("YE", "Yemen", Some("🇾🇪")),
    Country::new("ZM", "Zambia", Some("🇿🇲")),
    Country::new("ZW", "Zimbabwe", Some("🇿🇼")),
];
