//! Traditional → simplified character pairs.
//!
//! Pure data. Order does not matter here — the table builder sorts by the
//! traditional character's UTF-8 bytes before packing. Every traditional
//! character must encode to three UTF-8 bytes with a lead in 0xE4..=0xE9
//! (the CJK Unified Ideographs block); the builder asserts this.

pub(crate) static PAIRS: &[(char, char)] = &[
    ('萬', '万'), ('與', '与'), ('專', '专'), ('業', '业'), ('叢', '丛'),
    ('東', '东'), ('絲', '丝'), ('丟', '丢'), ('兩', '两'), ('嚴', '严'),
    ('喪', '丧'), ('個', '个'), ('豐', '丰'), ('臨', '临'), ('為', '为'),
    ('麗', '丽'), ('舉', '举'), ('義', '义'), ('烏', '乌'), ('樂', '乐'),
    ('喬', '乔'), ('習', '习'), ('鄉', '乡'), ('書', '书'), ('買', '买'),
    ('亂', '乱'), ('爭', '争'), ('虧', '亏'), ('雲', '云'), ('亞', '亚'),
    ('產', '产'), ('畝', '亩'), ('親', '亲'), ('億', '亿'), ('僅', '仅'),
    ('從', '从'), ('倉', '仓'), ('儀', '仪'), ('們', '们'), ('價', '价'),
    ('眾', '众'), ('優', '优'), ('夥', '伙'), ('會', '会'), ('傘', '伞'),
    ('偉', '伟'), ('傳', '传'), ('傷', '伤'), ('倫', '伦'), ('偽', '伪'),
    ('體', '体'), ('餘', '余'), ('傭', '佣'), ('側', '侧'), ('俠', '侠'),
    ('倆', '俩'), ('儉', '俭'), ('債', '债'), ('傾', '倾'), ('償', '偿'),
    ('儲', '储'), ('兒', '儿'), ('兌', '兑'), ('黨', '党'), ('蘭', '兰'),
    ('關', '关'), ('興', '兴'), ('養', '养'), ('獸', '兽'), ('內', '内'),
    ('岡', '冈'), ('冊', '册'), ('寫', '写'), ('軍', '军'), ('農', '农'),
    ('馮', '冯'), ('衝', '冲'), ('決', '决'), ('況', '况'), ('凍', '冻'),
    ('淨', '净'), ('準', '准'), ('涼', '凉'), ('減', '减'), ('湊', '凑'),
    ('幾', '几'), ('鳳', '凤'), ('鑿', '凿'), ('劉', '刘'), ('則', '则'),
    ('剛', '刚'), ('創', '创'), ('刪', '删'), ('別', '别'), ('劃', '划'),
    ('劇', '剧'), ('劍', '剑'), ('劑', '剂'), ('動', '动'), ('務', '务'),
    ('勵', '励'), ('勁', '劲'), ('勞', '劳'), ('勢', '势'), ('勳', '勋'),
    ('勸', '劝'), ('辦', '办'), ('協', '协'), ('華', '华'), ('單', '单'),
    ('賣', '卖'), ('盧', '卢'), ('衛', '卫'), ('廠', '厂'), ('歷', '历'),
    ('曆', '历'), ('厲', '厉'), ('壓', '压'), ('厭', '厌'), ('廁', '厕'),
    ('廂', '厢'), ('廈', '厦'), ('廚', '厨'), ('縣', '县'), ('參', '参'),
    ('雙', '双'), ('發', '发'), ('變', '变'), ('敘', '叙'), ('疊', '叠'),
    ('葉', '叶'), ('號', '号'), ('嘆', '叹'), ('後', '后'), ('嚇', '吓'),
    ('呂', '吕'), ('嗎', '吗'), ('員', '员'), ('聽', '听'), ('嗚', '呜'),
    ('問', '问'), ('啟', '启'), ('噸', '吨'), ('嘔', '呕'), ('園', '园'),
    ('圓', '圆'), ('團', '团'), ('圖', '图'), ('國', '国'), ('圍', '围'),
    ('壯', '壮'), ('聲', '声'), ('殼', '壳'), ('壺', '壶'), ('處', '处'),
    ('備', '备'), ('復', '复'), ('複', '复'), ('夠', '够'), ('夢', '梦'),
    ('頭', '头'), ('誇', '夸'), ('奪', '夺'), ('奮', '奋'), ('妝', '妆'),
    ('婦', '妇'), ('媽', '妈'), ('嬌', '娇'), ('嬰', '婴'), ('嬸', '婶'),
    ('學', '学'), ('孫', '孙'), ('寧', '宁'), ('寶', '宝'), ('實', '实'),
    ('審', '审'), ('憲', '宪'), ('宮', '宫'), ('寬', '宽'), ('賓', '宾'),
    ('導', '导'), ('壽', '寿'), ('將', '将'), ('爾', '尔'), ('塵', '尘'),
    ('嘗', '尝'), ('層', '层'), ('屆', '届'), ('屬', '属'), ('屢', '屡'),
    ('歲', '岁'), ('豈', '岂'), ('嶼', '屿'), ('島', '岛'), ('峽', '峡'),
    ('嶺', '岭'), ('鞏', '巩'), ('師', '师'), ('幣', '币'), ('帳', '帐'),
    ('帶', '带'), ('幟', '帜'), ('幫', '帮'), ('幹', '干'), ('廣', '广'),
    ('莊', '庄'), ('慶', '庆'), ('廬', '庐'), ('廟', '庙'), ('廢', '废'),
    ('廳', '厅'), ('開', '开'), ('異', '异'), ('棄', '弃'), ('張', '张'),
    ('彌', '弥'), ('彎', '弯'), ('彈', '弹'), ('強', '强'), ('歸', '归'),
    ('當', '当'), ('錄', '录'), ('彥', '彦'), ('徹', '彻'), ('徑', '径'),
    ('徵', '征'), ('憶', '忆'), ('憂', '忧'), ('懷', '怀'), ('態', '态'),
    ('憤', '愤'), ('慣', '惯'), ('總', '总'), ('懇', '恳'), ('惡', '恶'),
    ('慮', '虑'), ('懼', '惧'), ('驚', '惊'), ('慘', '惨'), ('慚', '惭'),
    ('應', '应'), ('懶', '懒'), ('戀', '恋'), ('戰', '战'), ('戲', '戏'),
    ('戶', '户'), ('擴', '扩'), ('掃', '扫'), ('揚', '扬'), ('擾', '扰'),
    ('撫', '抚'), ('拋', '抛'), ('搶', '抢'), ('護', '护'), ('報', '报'),
    ('擔', '担'), ('擬', '拟'), ('攏', '拢'), ('揀', '拣'), ('擁', '拥'),
    ('攔', '拦'), ('擰', '拧'), ('撥', '拨'), ('擇', '择'), ('掛', '挂'),
    ('擋', '挡'), ('撿', '捡'), ('換', '换'), ('揮', '挥'), ('損', '损'),
    ('撈', '捞'), ('捨', '舍'), ('據', '据'), ('捲', '卷'), ('掙', '挣'),
    ('搗', '捣'), ('擺', '摆'), ('攜', '携'), ('搖', '摇'), ('攤', '摊'),
    ('攬', '揽'), ('撲', '扑'), ('擊', '击'), ('敵', '敌'), ('斂', '敛'),
    ('數', '数'), ('齊', '齐'), ('斷', '断'), ('無', '无'), ('舊', '旧'),
    ('時', '时'), ('曠', '旷'), ('晝', '昼'), ('顯', '显'), ('曬', '晒'),
    ('曉', '晓'), ('暈', '晕'), ('暫', '暂'), ('術', '术'), ('樸', '朴'),
    ('機', '机'), ('殺', '杀'), ('雜', '杂'), ('權', '权'), ('條', '条'),
    ('來', '来'), ('楊', '杨'), ('標', '标'), ('棧', '栈'), ('棟', '栋'),
    ('樹', '树'), ('樣', '样'), ('橋', '桥'), ('檢', '检'), ('極', '极'),
    ('構', '构'), ('槍', '枪'), ('楓', '枫'), ('檔', '档'), ('橫', '横'),
    ('歐', '欧'), ('歡', '欢'), ('殘', '残'), ('殲', '歼'), ('毆', '殴'),
    ('氣', '气'), ('氫', '氢'), ('漢', '汉'), ('湯', '汤'), ('溝', '沟'),
    ('沒', '没'), ('滅', '灭'), ('濁', '浊'), ('測', '测'), ('濟', '济'),
    ('渾', '浑'), ('濃', '浓'), ('淺', '浅'), ('漸', '渐'), ('澆', '浇'),
    ('濤', '涛'), ('澇', '涝'), ('潤', '润'), ('漲', '涨'), ('濕', '湿'),
    ('溫', '温'), ('灣', '湾'), ('滲', '渗'), ('滿', '满'), ('濾', '滤'),
    ('濫', '滥'), ('灘', '滩'), ('灑', '洒'), ('潑', '泼'), ('潔', '洁'),
    ('澤', '泽'), ('濱', '滨'), ('瀉', '泻'), ('瀏', '浏'), ('瀕', '濒'),
    ('燈', '灯'), ('靈', '灵'), ('災', '灾'), ('煉', '炼'), ('煩', '烦'),
    ('燒', '烧'), ('燭', '烛'), ('煙', '烟'), ('熱', '热'), ('愛', '爱'),
    ('爺', '爷'), ('犧', '牺'), ('狀', '状'), ('獨', '独'), ('狹', '狭'),
    ('獅', '狮'), ('猶', '犹'), ('獄', '狱'), ('貓', '猫'), ('獻', '献'),
    ('獲', '获'), ('環', '环'), ('現', '现'), ('瑪', '玛'), ('電', '电'),
    ('畫', '画'), ('暢', '畅'), ('療', '疗'), ('瘋', '疯'), ('癢', '痒'),
    ('瘡', '疮'), ('盜', '盗'), ('盡', '尽'), ('監', '监'), ('盤', '盘'),
    ('盞', '盏'), ('礦', '矿'), ('碼', '码'), ('磚', '砖'), ('礎', '础'),
    ('禮', '礼'), ('禍', '祸'), ('禪', '禅'), ('離', '离'), ('種', '种'),
    ('積', '积'), ('稱', '称'), ('穀', '谷'), ('穩', '稳'), ('窮', '穷'),
    ('竊', '窃'), ('窯', '窑'), ('競', '竞'), ('筆', '笔'), ('筍', '笋'),
    ('簡', '简'), ('籃', '篮'), ('籌', '筹'), ('簽', '签'), ('籤', '签'),
    ('籠', '笼'), ('築', '筑'), ('篩', '筛'), ('類', '类'), ('糧', '粮'),
    ('緊', '紧'), ('紅', '红'), ('紀', '纪'), ('約', '约'), ('級', '级'),
    ('紛', '纷'), ('純', '纯'), ('納', '纳'), ('紙', '纸'), ('紋', '纹'),
    ('紡', '纺'), ('細', '细'), ('終', '终'), ('組', '组'), ('結', '结'),
    ('絕', '绝'), ('統', '统'), ('經', '经'), ('綠', '绿'), ('線', '线'),
    ('練', '练'), ('編', '编'), ('緣', '缘'), ('縛', '缚'), ('縫', '缝'),
    ('縮', '缩'), ('織', '织'), ('繞', '绕'), ('繩', '绳'), ('繪', '绘'),
    ('繼', '继'), ('續', '续'), ('纏', '缠'), ('罰', '罚'), ('罷', '罢'),
    ('羅', '罗'), ('聞', '闻'), ('聯', '联'), ('聰', '聪'), ('聖', '圣'),
    ('職', '职'), ('肅', '肃'), ('腸', '肠'), ('膚', '肤'), ('膠', '胶'),
    ('腦', '脑'), ('膽', '胆'), ('臉', '脸'), ('臘', '腊'), ('臟', '脏'),
    ('艦', '舰'), ('艱', '艰'), ('蘇', '苏'), ('蘋', '苹'), ('範', '范'),
    ('莖', '茎'), ('萊', '莱'), ('蒼', '苍'), ('蓋', '盖'), ('蓮', '莲'),
    ('蔣', '蒋'), ('薦', '荐'), ('薩', '萨'), ('藍', '蓝'), ('藝', '艺'),
    ('藥', '药'), ('蘿', '萝'), ('蟲', '虫'), ('蝦', '虾'), ('螞', '蚂'),
    ('蠅', '蝇'), ('蠶', '蚕'), ('蠻', '蛮'), ('銜', '衔'), ('補', '补'),
    ('錶', '表'), ('襯', '衬'), ('裝', '装'), ('褲', '裤'), ('襖', '袄'),
    ('見', '见'), ('規', '规'), ('視', '视'), ('覺', '觉'), ('覽', '览'),
    ('觀', '观'), ('觸', '触'), ('計', '计'), ('訂', '订'), ('認', '认'),
    ('討', '讨'), ('讓', '让'), ('訓', '训'), ('議', '议'), ('記', '记'),
    ('講', '讲'), ('許', '许'), ('論', '论'), ('設', '设'), ('訪', '访'),
    ('評', '评'), ('識', '识'), ('詞', '词'), ('譯', '译'), ('試', '试'),
    ('詩', '诗'), ('話', '话'), ('誕', '诞'), ('詳', '详'), ('語', '语'),
    ('誤', '误'), ('說', '说'), ('誰', '谁'), ('課', '课'), ('調', '调'),
    ('談', '谈'), ('請', '请'), ('諸', '诸'), ('謀', '谋'), ('謝', '谢'),
    ('謠', '谣'), ('證', '证'), ('譜', '谱'), ('讀', '读'), ('豬', '猪'),
    ('貝', '贝'), ('貞', '贞'), ('負', '负'), ('財', '财'), ('貢', '贡'),
    ('貧', '贫'), ('貨', '货'), ('販', '贩'), ('貪', '贪'), ('貫', '贯'),
    ('責', '责'), ('貴', '贵'), ('貸', '贷'), ('費', '费'), ('貼', '贴'),
    ('賀', '贺'), ('資', '资'), ('賊', '贼'), ('賠', '赔'), ('賦', '赋'),
    ('賬', '账'), ('賭', '赌'), ('賴', '赖'), ('贈', '赠'), ('贊', '赞'),
    ('贏', '赢'), ('趕', '赶'), ('趙', '赵'), ('車', '车'), ('軌', '轨'),
    ('軟', '软'), ('較', '较'), ('載', '载'), ('輔', '辅'), ('輕', '轻'),
    ('輛', '辆'), ('輝', '辉'), ('輪', '轮'), ('輸', '输'), ('轉', '转'),
    ('轎', '轿'), ('辭', '辞'), ('遲', '迟'), ('達', '达'), ('過', '过'),
    ('違', '违'), ('遠', '远'), ('遜', '逊'), ('遞', '递'), ('選', '选'),
    ('還', '还'), ('邊', '边'), ('邏', '逻'), ('郵', '邮'), ('鄰', '邻'),
    ('鄭', '郑'), ('醫', '医'), ('釀', '酿'), ('釋', '释'), ('鐘', '钟'),
    ('針', '针'), ('釣', '钓'), ('鈍', '钝'), ('鈔', '钞'), ('鋼', '钢'),
    ('鈕', '钮'), ('錢', '钱'), ('鉗', '钳'), ('鉛', '铅'), ('銀', '银'),
    ('銅', '铜'), ('銘', '铭'), ('鋒', '锋'), ('鋤', '锄'), ('鋪', '铺'),
    ('錯', '错'), ('錫', '锡'), ('錦', '锦'), ('鍵', '键'), ('鎖', '锁'),
    ('鎮', '镇'), ('鏡', '镜'), ('鐵', '铁'), ('鑄', '铸'), ('長', '长'),
    ('門', '门'), ('閃', '闪'), ('閉', '闭'), ('閏', '闰'), ('閑', '闲'),
    ('間', '间'), ('閘', '闸'), ('閣', '阁'), ('閥', '阀'), ('閱', '阅'),
    ('闊', '阔'), ('闖', '闯'), ('陸', '陆'), ('陽', '阳'), ('陰', '阴'),
    ('陳', '陈'), ('階', '阶'), ('際', '际'), ('隨', '随'), ('險', '险'),
    ('隱', '隐'), ('難', '难'), ('雞', '鸡'), ('雖', '虽'), ('霧', '雾'),
    ('靂', '雳'), ('靜', '静'), ('韋', '韦'), ('韓', '韩'), ('頁', '页'),
    ('頂', '顶'), ('項', '项'), ('順', '顺'), ('須', '须'), ('頑', '顽'),
    ('頓', '顿'), ('預', '预'), ('領', '领'), ('頗', '颇'), ('頻', '频'),
    ('題', '题'), ('額', '额'), ('顏', '颜'), ('願', '愿'), ('顧', '顾'),
    ('風', '风'), ('飄', '飘'), ('飛', '飞'), ('飯', '饭'), ('飲', '饮'),
    ('飽', '饱'), ('飾', '饰'), ('餃', '饺'), ('餅', '饼'), ('餓', '饿'),
    ('館', '馆'), ('饅', '馒'), ('馬', '马'), ('駁', '驳'), ('駐', '驻'),
    ('駕', '驾'), ('駛', '驶'), ('騎', '骑'), ('騙', '骗'), ('騷', '骚'),
    ('驅', '驱'), ('驕', '骄'), ('驗', '验'), ('髒', '脏'), ('鬆', '松'),
    ('鬥', '斗'), ('鬧', '闹'), ('魯', '鲁'), ('魚', '鱼'), ('鮮', '鲜'),
    ('鯊', '鲨'), ('鳥', '鸟'), ('鳴', '鸣'), ('鴉', '鸦'), ('鴨', '鸭'),
    ('鴻', '鸿'), ('鵝', '鹅'), ('鷹', '鹰'), ('鹽', '盐'), ('麥', '麦'),
    ('麵', '面'), ('點', '点'), ('齒', '齿'), ('龍', '龙'), ('龜', '龟'),
];
